use crate::core::errors::LifeFlowError;
use crate::core::models::Role;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // User ID
    pub role: Role,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<u64, LifeFlowError> {
        self.sub
            .parse()
            .map_err(|_| LifeFlowError::Unauthorized(format!("Malformed subject: {}", self.sub)))
    }
}

pub struct JwtService {
    secret: String,
    ttl_secs: u64,
}

impl JwtService {
    pub fn new(secret: String, ttl_secs: u64) -> Self {
        JwtService { secret, ttl_secs }
    }

    pub fn generate_token(&self, user_id: u64, role: Role) -> Result<String, LifeFlowError> {
        let expiration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().saturating_add(self.ttl_secs) as usize)
            .map_err(|e| LifeFlowError::InternalServerError(format!("Time error: {}", e)))?;

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| LifeFlowError::InternalServerError(format!("JWT encoding error: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, LifeFlowError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| LifeFlowError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}
