use std::sync::Arc;

use datachat_storage::{User, UserStore};

use crate::{
    error::{AuthError, Result},
    password::{hash_password, verify_password},
    token::TokenService,
    validate,
};

/// Orchestrates registration, login and token-based authentication over a
/// credential store.
pub struct AuthGateway {
    store: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthGateway {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Register a new account.
    ///
    /// Returns the stored user; no token is issued — the caller logs in
    /// separately. Duplicate emails surface from the store's atomic
    /// check-and-insert, never from a prior existence probe here.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> Result<User> {
        validate::signup(email, password, name)?;

        let password_hash = hash_password(password)?;
        let user = self
            .store
            .create_user(User::new(email.to_string(), password_hash, name.to_string()))
            .await?;

        tracing::info!(user_id = %user.id, "registered new user");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token claiming the user's id.
    ///
    /// Unknown email and wrong password are distinct variants here; the
    /// HTTP boundary collapses both into one unauthorized body.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        validate::signin(email, password)?;

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue(&user.id.to_string())
    }

    /// Resolve an Authorization header to the token's embedded user id.
    ///
    /// Missing header, wrong framing and failed verification are all the
    /// same negative outcome, not an error. No store lookup happens here:
    /// the signature alone is trusted, so an account deleted after issuance
    /// still authenticates until the secret rotates.
    pub fn authenticate(&self, authorization: Option<&str>) -> Option<String> {
        let token = authorization?.strip_prefix("Bearer ")?;

        match self.tokens.verify(token) {
            Ok(claims) => Some(claims.user_id),
            Err(err) => {
                tracing::debug!(%err, "token verification failed");
                None
            }
        }
    }
}
