pub mod change_password;
pub mod list;
pub mod me;
