pub mod login;
pub mod refresh;
