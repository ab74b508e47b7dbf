use tracing::{info, warn};
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::contact_dto::ContactRequest;
use crate::services::email_service::EmailService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ContactController {
    email_service: EmailService,
}

impl ContactController {
    pub fn new(state: &AppState) -> Self {
        Self {
            email_service: EmailService::new(state.http_client.clone(), state.config.clone()),
        }
    }

    /// El formulario siempre responde OK sobre input válido; el email de
    /// notificación es best-effort.
    pub async fn submit(&self, request: ContactRequest) -> Result<ApiResponse<()>, AppError> {
        request.validate()?;

        if self.email_service.is_configured() {
            if let Err(e) = self.email_service.send_contact_notification(&request).await {
                warn!("No se pudo enviar la notificación de contacto: {}", e);
            }
        }

        info!(
            "📧 Contact form submission: name='{}' email='{}' subject='{}'",
            request.name, request.email, request.subject
        );

        Ok(ApiResponse::message_only(
            "Thank you for your message. We will get back to you shortly!".to_string(),
        ))
    }
}
