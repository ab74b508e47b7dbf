//! Sembrar el contenido por defecto del CMS: las tres secciones de la
//! homepage y los tres fleet types iniciales. Idempotente (upserts).

use dotenvy::dotenv;
use sqlx::PgPool;

struct SectionSeed {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    button_text: &'static str,
    button_link: &'static str,
    sort_order: i32,
}

struct FleetTypeSeed {
    name: &'static str,
    description: &'static str,
    sort_order: i32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = PgPool::connect(&database_url).await?;

    println!("🌱 Sembrando contenido por defecto...");

    let sections = [
        SectionSeed {
            key: "luxury-choice",
            title: "Luxury Choice",
            description: "Choose from our wide range of luxury vehicles for your next trip.",
            button_text: "Book Now",
            button_link: "/book",
            sort_order: 0,
        },
        SectionSeed {
            key: "fleet-preview",
            title: "Our Fleet",
            description: "Explore our premium collection of luxury vehicles",
            button_text: "View All Vehicles",
            button_link: "/fleet",
            sort_order: 1,
        },
        SectionSeed {
            key: "services-preview",
            title: "Our Services",
            description: "Premium transportation solutions for every occasion",
            button_text: "View All Services",
            button_link: "/services",
            sort_order: 2,
        },
    ];

    for section in &sections {
        sqlx::query(
            r#"
            INSERT INTO homepage_sections (section_key, title, description, button_text, button_link, is_active, sort_order)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6)
            ON CONFLICT (section_key) DO UPDATE
            SET title = EXCLUDED.title, description = EXCLUDED.description,
                button_text = EXCLUDED.button_text, button_link = EXCLUDED.button_link,
                is_active = TRUE, sort_order = EXCLUDED.sort_order, updated_at = now()
            "#,
        )
        .bind(section.key)
        .bind(section.title)
        .bind(section.description)
        .bind(section.button_text)
        .bind(section.button_link)
        .bind(section.sort_order)
        .execute(&pool)
        .await?;

        println!("✅ Sección {} lista", section.key);
    }

    let fleet_types = [
        FleetTypeSeed { name: "SUV", description: "Sport Utility Vehicles", sort_order: 0 },
        FleetTypeSeed { name: "Sedan", description: "Luxury Sedans", sort_order: 1 },
        FleetTypeSeed { name: "Sports", description: "Sports Cars", sort_order: 2 },
    ];

    for fleet_type in &fleet_types {
        sqlx::query(
            r#"
            INSERT INTO fleet_types (name, description, sort_order, is_active)
            VALUES ($1, $2, $3, TRUE)
            ON CONFLICT (name) DO UPDATE
            SET description = EXCLUDED.description, sort_order = EXCLUDED.sort_order,
                is_active = TRUE, updated_at = now()
            "#,
        )
        .bind(fleet_type.name)
        .bind(fleet_type.description)
        .bind(fleet_type.sort_order)
        .execute(&pool)
        .await?;

        println!("✅ Fleet type {} listo", fleet_type.name);
    }

    println!("✨ Contenido por defecto sembrado");
    Ok(())
}
