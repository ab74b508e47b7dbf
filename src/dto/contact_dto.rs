use serde::Deserialize;
use validator::Validate;

/// Request del formulario público de contacto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}
