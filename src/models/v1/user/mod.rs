use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::responses::v1::user::User;

/// Fields needed to persist a new account. `password` is already hashed.
#[derive(Clone, Debug, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_username<T: ToString>(
        db: &DatabaseConnection,
        username: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username.to_string()))
            .one(db)
            .await
    }

    /// Every active account, oldest first
    pub async fn active(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn store(db: &DatabaseConnection, user: NewUser) -> Result<Self, DbErr> {
        let model = ActiveModel {
            username: Set(user.username),
            email: Set(user.email),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            password: Set(user.password),
            is_active: Set(user.is_active),
            is_staff: Set(user.is_staff),
            is_superuser: Set(user.is_superuser),
            last_login: Set(None),
            date_joined: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(db).await
    }

    pub async fn update_password(
        &self,
        db: &DatabaseConnection,
        password: String,
    ) -> Result<Self, DbErr> {
        let mut model = ActiveModel::from(self.clone());

        model.password = Set(password);
        model.update(db).await
    }

    pub async fn touch_last_login(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        let mut model = ActiveModel::from(self.clone());

        model.last_login = Set(Some(Utc::now().naive_utc()));
        model.update(db).await
    }
}

impl From<Model> for User {
    fn from(val: Model) -> Self {
        User {
            id: val.id,
            username: val.username,
            email: val.email,
            first_name: val.first_name,
            last_name: val.last_name,
            is_staff: val.is_staff,
            is_superuser: val.is_superuser,
            last_login: val.last_login,
            date_joined: val.date_joined,
        }
    }
}

impl From<&Model> for User {
    fn from(val: &Model) -> Self {
        val.clone().into()
    }
}
