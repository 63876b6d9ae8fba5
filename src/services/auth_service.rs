use crate::auth::{self, password, Claims};
use crate::database::manager::DatabaseError;
use crate::database::models::user::User;
use crate::database::repositories::users::UserRepository;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("password processing failed")]
    Password,

    #[error(transparent)]
    Token(#[from] auth::JwtError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Account registration and credential verification. Session issuance lives
/// here; session *validation* is the middleware's job.
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub async fn new() -> Result<Self, DatabaseError> {
        Ok(Self {
            users: UserRepository::new().await?,
        })
    }

    /// Create an account. The password is stored as an Argon2id hash.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let hash = password::hash_password(password).map_err(|_| AuthError::Password)?;
        Ok(self.users.insert(username, email, &hash).await?)
    }

    /// Verify credentials and issue a session token. Unknown email and wrong
    /// password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, pass: &str) -> Result<(String, User), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        password::verify_password(pass, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        let claims = Claims::new(user.email.clone(), user.username.clone());
        let token = auth::generate_jwt(claims)?;

        Ok((token, user))
    }
}
