use argon2::password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{ARGON2ID_IDENT, Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::config::auth::Argon2Config;

/// Argon2id hasher for stored user passwords
///
/// Output is a PHC string (`$argon2id$v=19$m=..,t=..,p=..$<salt>$<hash>`), so
/// the salt and costs live inside the `password` column itself.
///
/// ```no_run
/// use user_auth_api::config::Argon2Config;
/// use user_auth_api::security::PasswordHasher;
///
/// let hasher = PasswordHasher::from_config(&Argon2Config::default()).unwrap();
/// let stored = hasher.hash("123456").unwrap();
/// assert!(hasher.verify("123456", &stored).unwrap());
/// ```
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Fails when Argon2 rejects the configured costs.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &Argon2Config) -> Result<Self, password_hash::Error> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            Some(config.hash_length as usize),
        )?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    #[tracing::instrument(skip_all)]
    pub fn hash(&self, password: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    }

    /// `Ok(false)` on a wrong password, `Err` only when `stored` is not a
    /// PHC string.
    #[tracing::instrument(skip_all)]
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, password_hash::Error> {
        let stored = PasswordHash::new(stored)?;

        match self.argon2.verify_password(password.as_bytes(), &stored) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// True when `stored` was made by another algorithm or with other costs
    #[tracing::instrument(skip_all)]
    pub fn needs_rehash(&self, stored: &str) -> Result<bool, password_hash::Error> {
        let stored = PasswordHash::new(stored)?;

        if stored.algorithm != ARGON2ID_IDENT {
            return Ok(true);
        }

        let theirs = Params::try_from(&stored)?;
        let ours = self.argon2.params();

        Ok((theirs.m_cost(), theirs.t_cost(), theirs.p_cost())
            != (ours.m_cost(), ours.t_cost(), ours.p_cost()))
    }
}
