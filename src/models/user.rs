//! Modelo de User y tokens de reset de contraseña
//!
//! Usuarios del panel de administración. El rol 'admin' habilita
//! todas las rutas de mutación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Token de reset de contraseña: un solo uso, expira en una hora
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PasswordResetToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_expiring_in(minutes: i64) -> PasswordResetToken {
        PasswordResetToken {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token: "abc".to_string(),
            expires_at: Utc::now() + Duration::minutes(minutes),
            used: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_expiry() {
        assert!(!token_expiring_in(60).is_expired());
        assert!(token_expiring_in(-1).is_expired());
    }

    #[test]
    fn test_is_admin() {
        let user = User {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: ROLE_ADMIN.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(user.is_admin());
    }
}
