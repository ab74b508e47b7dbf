use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use chauffeur_booking::config::environment::EnvironmentConfig;
use chauffeur_booking::database::DatabaseConnection;
use chauffeur_booking::routes::create_app;
use chauffeur_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚘 Chauffeur Booking - API del sitio y panel de administración");
    info!("==============================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Ejecutar migraciones pendientes
    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();

    if config.email_enabled() {
        info!("✅ Email transaccional habilitado (Resend)");
    } else {
        info!("⚠️ RESEND_API_KEY no configurado - emails deshabilitados");
    }

    if config.supabase_enabled() {
        info!("✅ Storage de imágenes: Supabase");
    } else {
        info!("⚠️ Storage de imágenes: disco local ({})", config.upload_dir);
    }

    let port = config.port;
    let app_state = AppState::new(pool, config);
    let app = create_app(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/login - Login del admin");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("   PUT  /api/auth/change-password - Cambiar contraseña");
    info!("   POST /api/auth/forgot-password - Solicitar reset");
    info!("   POST /api/auth/reset-password - Canjear token de reset");
    info!("📅 Bookings:");
    info!("   POST /api/booking/create - Crear reserva (público)");
    info!("   GET  /api/booking/list - Listar reservas");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   PUT  /api/booking/:id/update - Actualizar estado");
    info!("🚗 CMS - Vehicles:");
    info!("   GET/POST /api/cms/vehicles - Listar / crear");
    info!("   GET/PUT/DELETE /api/cms/vehicles/:id");
    info!("🧭 CMS - Services:");
    info!("   GET/POST /api/cms/services - Listar / crear");
    info!("   GET/PUT/DELETE /api/cms/services/:id");
    info!("   GET  /api/cms/services/slug/:slug - Detalle por slug");
    info!("📄 CMS - Pages:");
    info!("   GET/POST /api/cms/pages - Listar / crear");
    info!("   GET/PUT/DELETE /api/cms/pages/:id");
    info!("🏷️ CMS - Fleet types:");
    info!("   GET/POST /api/cms/fleet-types - Listar / crear");
    info!("   GET/PUT/DELETE /api/cms/fleet-types/:id");
    info!("🖼️ CMS - Contenido:");
    info!("   GET/POST/PUT /api/cms/hero - Hero de la homepage");
    info!("   GET/POST /api/cms/homepage-sections - Secciones");
    info!("   GET/PUT/DELETE /api/cms/homepage-sections/:key");
    info!("   GET/PUT /api/cms/site-settings - Info de contacto");
    info!("📬 Otros:");
    info!("   POST /api/contact - Formulario de contacto");
    info!("   POST /api/upload/image - Subir imagen (admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
