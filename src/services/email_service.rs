//! Servicio de email transaccional
//!
//! Cliente de la API HTTP de Resend. Los envíos son best-effort: los
//! callers registran el error y continúan, el flujo del usuario nunca
//! falla por un problema de email.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::environment::EnvironmentConfig;
use crate::dto::contact_dto::ContactRequest;
use crate::utils::errors::AppError;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

pub struct EmailService {
    client: Client,
    config: EnvironmentConfig,
}

impl EmailService {
    pub fn new(client: Client, config: EnvironmentConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.email_enabled()
    }

    /// Enviar un email vía Resend
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        let api_key = self
            .config
            .resend_api_key
            .as_ref()
            .ok_or_else(|| AppError::ExternalApi("Resend no está configurado".to_string()))?;

        let body = json!({
            "from": self.config.resend_from_email,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error enviando email: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Resend respondió {}: {}",
                status, text
            )));
        }

        debug!("📨 Email enviado a {}", to);
        Ok(())
    }

    /// Email de reset de contraseña con el link de un solo uso
    pub async fn send_password_reset(&self, to: &str, reset_url: &str) -> Result<(), AppError> {
        self.send(to, "Reset Your Password - AL SAMA", &reset_email_html(reset_url))
            .await
    }

    /// Notificación interna del formulario de contacto
    pub async fn send_contact_notification(
        &self,
        contact: &ContactRequest,
    ) -> Result<(), AppError> {
        let subject = format!("[AL SAMA Contact] {}", contact.subject);
        self.send(&self.config.contact_email, &subject, &contact_email_html(contact))
            .await
    }
}

fn reset_email_html(reset_url: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #DC143C;">Reset Your Password</h2>
  <p>You requested to reset your password for your AL SAMA admin account.</p>
  <p>Click the button below to reset your password:</p>
  <a href="{url}" style="display: inline-block; background-color: #DC143C; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px; margin: 20px 0;">Reset Password</a>
  <p>Or copy and paste this link into your browser:</p>
  <p style="word-break: break-all; color: #666;">{url}</p>
  <p style="color: #999; font-size: 12px; margin-top: 30px;">This link will expire in 1 hour. If you didn't request this, please ignore this email.</p>
</div>"#,
        url = reset_url
    )
}

fn contact_email_html(contact: &ContactRequest) -> String {
    format!(
        r#"<h2>New Contact Form Submission</h2>
<p><strong>Name:</strong> {}</p>
<p><strong>Email:</strong> {}</p>
<p><strong>Subject:</strong> {}</p>
<p><strong>Message:</strong></p>
<p>{}</p>"#,
        contact.name,
        contact.email,
        contact.subject,
        contact.message.replace('\n', "<br>")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_email_contains_url() {
        let html = reset_email_html("https://example.com/admin/reset-password?token=abc");
        assert!(html.contains("https://example.com/admin/reset-password?token=abc"));
        assert!(html.contains("expire in 1 hour"));
    }

    #[test]
    fn test_contact_email_escapes_newlines() {
        let contact = ContactRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Airport transfer".to_string(),
            message: "line one\nline two".to_string(),
        };
        let html = contact_email_html(&contact);
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("Jane"));
        assert!(html.contains("jane@example.com"));
    }
}
