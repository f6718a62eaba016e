use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};
use tencowry_favorites::{
    config::AppConfig,
    db::{DbPool, create_pool, orm_from_pool, run_migrations},
    entity::products::{ActiveModel as ProductActive, Column, Entity as Products},
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    ensure_user(&pool, &config.favorites.default_user_id).await?;
    seed_products(&pool).await?;

    println!(
        "Seed completed. Default user: {}",
        config.favorites.default_user_id
    );
    Ok(())
}

async fn ensure_user(pool: &DbPool, user_id: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .execute(pool)
    .await?;

    println!("Ensured user {user_id}");
    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    let orm = orm_from_pool(pool);
    let products = vec![
        (1, "Ankara Tote Bag", "Hand-stitched wax print tote", 1_250_000, "bags"),
        (2, "Kente Scarf", "Woven cotton scarf", 850_000, "accessories"),
        (3, "Leather Sandals", "Handmade leather sandals", 1_500_000, "shoes"),
        (7, "Beaded Necklace", "Glass bead statement necklace", 450_000, "jewellery"),
    ];

    for (product_id, name, description, price, category) in products {
        let existing = Products::find()
            .filter(Column::ProductId.eq(product_id))
            .one(&orm)
            .await?;
        if existing.is_some() {
            continue;
        }

        ProductActive {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            price: Set(price),
            details: Set(serde_json::json!({ "category": category })),
            created_at: NotSet,
        }
        .insert(&orm)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
