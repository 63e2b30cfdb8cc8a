pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService, TokenError, TokenType};
pub use password::PasswordHasher;
