//! Crear (o actualizar) el usuario admin del panel.
//!
//! Uso: create_admin <email> <password>
//! Lee DATABASE_URL del entorno o de .env.

use bcrypt::{hash, DEFAULT_COST};
use dotenvy::dotenv;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Uso: create_admin <email> <password>");
        std::process::exit(1);
    }

    let email = args[1].trim().to_lowercase();
    let password = &args[2];

    if !email.contains('@') {
        eprintln!("❌ Email inválido: {}", email);
        std::process::exit(1);
    }

    if password.len() < 8 {
        eprintln!("❌ La contraseña debe tener al menos 8 caracteres");
        std::process::exit(1);
    }

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = PgPool::connect(&database_url).await?;

    let password_hash = hash(password, DEFAULT_COST)?;

    sqlx::query(
        r#"
        INSERT INTO users (email, password_hash, role)
        VALUES ($1, $2, 'admin')
        ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash, updated_at = now()
        "#,
    )
    .bind(&email)
    .bind(&password_hash)
    .execute(&pool)
    .await?;

    println!("✅ Admin listo: {}", email);
    Ok(())
}
