use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// Claims carried by a bearer token.
///
/// The payload is exactly the user identifier. There is deliberately no
/// expiry claim: a token stays valid until the signing secret rotates,
/// matching the trust model of the system this backend fronts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Issues and verifies HS256 bearer tokens.
///
/// The signing secret is process-wide configuration, injected once at
/// construction and immutable for the process lifetime.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        // Tokens carry no exp claim; the default validation would reject
        // them outright.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token embedding the given user id.
    pub fn issue(&self, user_id: &str) -> Result<String> {
        let claims = Claims {
            user_id: user_id.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }

    /// Check the signature and return the embedded claims.
    ///
    /// Malformed, tampered, or wrongly-signed tokens all fail with
    /// [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
