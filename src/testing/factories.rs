use std::sync::atomic::{AtomicUsize, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

use crate::entities::v1::users::Model;
use crate::models::v1::user::NewUser;
use crate::security::PasswordHasher;

/// Password every factory-built user logs in with unless overridden
pub const DEFAULT_PASSWORD: &str = "123456";

static SEQUENCE: AtomicUsize = AtomicUsize::new(1);

/// Builds and persists users for tests
///
/// ```no_run
/// # use user_auth_api::testing::{setup, UserFactory};
/// # async fn example() {
/// let db = setup::database().await;
/// let hasher = setup::password_hasher();
///
/// let admin = UserFactory::admin().create(&db, &hasher).await.unwrap();
/// assert!(admin.is_superuser);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct UserFactory {
    prefix: &'static str,
    username: Option<String>,
    email: Option<String>,
    password: String,
    is_active: bool,
    is_staff: bool,
    is_superuser: bool,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFactory {
    /// Plain client user
    pub fn new() -> Self {
        Self {
            prefix: "user",
            username: None,
            email: None,
            password: DEFAULT_PASSWORD.to_string(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
        }
    }

    pub fn staff() -> Self {
        Self {
            prefix: "staff",
            is_staff: true,
            ..Self::new()
        }
    }

    pub fn admin() -> Self {
        Self {
            prefix: "admin",
            is_staff: true,
            is_superuser: true,
            ..Self::new()
        }
    }

    pub fn username<T: ToString>(mut self, username: T) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn email<T: ToString>(mut self, email: T) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn password<T: ToString>(mut self, password: T) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub async fn create(
        self,
        db: &DatabaseConnection,
        hasher: &PasswordHasher,
    ) -> Result<Model, DbErr> {
        let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let username = self
            .username
            .unwrap_or_else(|| format!("{}_{}", self.prefix, n));
        let email = self
            .email
            .unwrap_or_else(|| format!("{}@example.com", username));
        let password = hasher
            .hash(&self.password)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?;

        Model::store(
            db,
            NewUser {
                username,
                email,
                first_name: "Test".to_string(),
                last_name: self.prefix.to_string(),
                password,
                is_active: self.is_active,
                is_staff: self.is_staff,
                is_superuser: self.is_superuser,
            },
        )
        .await
    }
}
