use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use rand::RngCore;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{
    ChangePasswordRequest, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest,
    LoginResponse, MeResponse, ResetPasswordRequest,
};
use crate::dto::common::ApiResponse;
use crate::repositories::user_repository::UserRepository;
use crate::services::email_service::EmailService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

/// Mensaje neutral del forgot-password para no revelar si el email existe
const NEUTRAL_RESET_MESSAGE: &str =
    "If an account exists with this email, a password reset link has been sent.";

pub struct AuthController {
    repository: UserRepository,
    email_service: EmailService,
    config: crate::config::environment::EnvironmentConfig,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: UserRepository::new(state.pool.clone()),
            email_service: EmailService::new(state.http_client.clone(), state.config.clone()),
            config: state.config.clone(),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.role, &JwtConfig::from(&self.config))?;

        Ok(LoginResponse::success(
            token,
            user.id.to_string(),
            user.email,
            user.role,
        ))
    }

    pub async fn me(&self, user_id: Uuid) -> Result<MeResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

        Ok(MeResponse {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

        let valid = verify(&request.current_password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;

        if !valid {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        let password_hash = hash(&request.new_password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando contraseña: {}", e)))?;

        self.repository.update_password(user.id, &password_hash).await?;

        Ok(ApiResponse::message_only(
            "Password updated successfully".to_string(),
        ))
    }

    /// Genera un token de un solo uso con expiración de una hora.
    /// Siempre responde el mensaje neutral, exista o no el usuario.
    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, AppError> {
        request.validate()?;

        let neutral = ForgotPasswordResponse {
            message: NEUTRAL_RESET_MESSAGE.to_string(),
            token: None,
            reset_url: None,
        };

        let user = match self.repository.find_by_email(&request.email).await? {
            Some(user) => user,
            None => return Ok(neutral),
        };

        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::hours(1);

        // Un solo token vigente por usuario
        self.repository.delete_unused_tokens(user.id, None).await?;
        self.repository
            .create_reset_token(user.id, &token, expires_at)
            .await?;

        let reset_url = format!(
            "{}/admin/reset-password?token={}",
            self.config.public_base_url.trim_end_matches('/'),
            token
        );

        // Best-effort: un fallo de email no rompe el flujo
        if self.email_service.is_configured() {
            if let Err(e) = self
                .email_service
                .send_password_reset(&user.email, &reset_url)
                .await
            {
                warn!("No se pudo enviar el email de reset: {}", e);
            }
        }

        // En desarrollo se devuelve el token para probar sin email
        if self.config.is_development() {
            return Ok(ForgotPasswordResponse {
                message: NEUTRAL_RESET_MESSAGE.to_string(),
                token: Some(token),
                reset_url: Some(reset_url),
            });
        }

        Ok(neutral)
    }

    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request.validate()?;

        let reset_token = self
            .repository
            .find_reset_token(&request.token)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest("Invalid or expired reset token".to_string())
            })?;

        if reset_token.used {
            return Err(AppError::BadRequest(
                "This reset token has already been used".to_string(),
            ));
        }

        if reset_token.is_expired() {
            return Err(AppError::BadRequest(
                "This reset token has expired".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando contraseña: {}", e)))?;

        self.repository
            .update_password(reset_token.user_id, &password_hash)
            .await?;
        self.repository.mark_token_used(reset_token.id).await?;
        // Invalidar el resto de los tokens sin usar del usuario
        self.repository
            .delete_unused_tokens(reset_token.user_id, Some(reset_token.id))
            .await?;

        Ok(ApiResponse::message_only(
            "Password reset successfully".to_string(),
        ))
    }
}

/// Token aleatorio de 32 bytes en hexadecimal (64 caracteres)
fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_reset_token_shape() {
        let token = generate_reset_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_reset_token_unique() {
        assert_ne!(generate_reset_token(), generate_reset_token());
    }
}
