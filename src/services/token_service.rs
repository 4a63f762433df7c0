//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a single process-wide secret. The
//! secret is read once at startup and handed to `AuthGate::new`.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::models::{account::Account, token::TokenClaims};

/// Not-before instant stamped on every token: 2015-10-10T12:00:00Z.
pub const TOKEN_NOT_BEFORE: i64 = 1_444_478_400;

/// Signs tokens for new accounts and verifies presented ones.
pub struct AuthGate {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthGate {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // any HMAC variant is accepted, nothing outside that family
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a token naming `account`.
    pub fn issue(&self, account: &Account) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = TokenClaims {
            id: account.id,
            account_number: account.number.clone(),
            nbf: TOKEN_NOT_BEFORE,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify signature, algorithm and not-before of `token`.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}
