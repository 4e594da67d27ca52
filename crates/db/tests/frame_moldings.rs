//! Integration tests for the frame molding catalog.

use catalog_core::listing::{MoldingSortKey, Sort, SortOrder};
use catalog_core::types::DbId;
use catalog_db::models::color::{Color, CreateColor};
use catalog_db::models::filters::MoldingFacetValues;
use catalog_db::models::frame_molding::{CreateFrameMolding, FrameMolding, MoldingListParams};
use catalog_db::repositories::{ColorRepo, FilterRepo, FrameMoldingRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_color(pool: &PgPool, name: &str, codes: &[&str]) -> Color {
    ColorRepo::create(
        pool,
        &CreateColor {
            name: name.to_string(),
            code: codes.iter().map(|c| c.to_string()).collect(),
        },
    )
    .await
    .unwrap()
}

async fn seed_molding(
    pool: &PgPool,
    color_id: DbId,
    name: &str,
    material: &str,
    width: i32,
    cents: i64,
) -> FrameMolding {
    FrameMoldingRepo::create(
        pool,
        &CreateFrameMolding {
            color_id,
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            width,
            material: material.to_string(),
            images: None,
            description: None,
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: listing and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_unbounded_without_limit(pool: PgPool) {
    let white = seed_color(&pool, "Белый", &["#FFFFFF"]).await;
    for i in 0..15 {
        seed_molding(&pool, white.id, &format!("Багет {i}"), "дерево", 20, 1_000).await;
    }

    let page = FrameMoldingRepo::list(&pool, &MoldingListParams::default())
        .await
        .unwrap();
    assert_eq!(page.count, 15);
    assert_eq!(page.rows.len(), 15);
    assert!(page.rows.iter().all(|r| r.color.id == white.id));

    let limited = MoldingListParams {
        limit: Some(5),
        offset: Some(12),
        ..Default::default()
    };
    let page = FrameMoldingRepo::list(&pool, &limited).await.unwrap();
    assert_eq!(page.count, 15);
    assert_eq!(page.rows.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_name_and_sorts_by_width(pool: PgPool) {
    let gold = seed_color(&pool, "Золото", &["#D4AF37", "#B8860B"]).await;
    seed_molding(&pool, gold.id, "Classic wide", "дерево", 60, 3_000).await;
    seed_molding(&pool, gold.id, "Classic slim", "дерево", 15, 1_500).await;
    seed_molding(&pool, gold.id, "Modern", "алюминий", 10, 900).await;

    let params = MoldingListParams {
        title: Some("classic".to_string()),
        sort: Sort {
            key: MoldingSortKey::Width,
            order: SortOrder::Asc,
        },
        ..Default::default()
    };
    let page = FrameMoldingRepo::list(&pool, &params).await.unwrap();

    assert_eq!(page.count, 2);
    let names: Vec<&str> = page.rows.iter().map(|r| r.molding.name.as_str()).collect();
    assert_eq!(names, ["Classic slim", "Classic wide"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_includes_color(pool: PgPool) {
    let gold = seed_color(&pool, "Золото", &["#D4AF37", "#B8860B"]).await;
    let molding = seed_molding(&pool, gold.id, "Classic", "дерево", 40, 2_490).await;

    let found = FrameMoldingRepo::find_by_id_with_color(&pool, molding.id)
        .await
        .unwrap()
        .expect("molding should exist");
    assert_eq!(found.molding.price, Decimal::new(2_490, 2));
    assert_eq!(found.color.code, vec!["#D4AF37", "#B8860B"]);

    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["name"], "Classic");
    assert_eq!(json["color"]["name"], "Золото");

    let missing = FrameMoldingRepo::find_by_id_with_color(&pool, molding.id + 1000)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_color_cascades_to_moldings(pool: PgPool) {
    let red = seed_color(&pool, "Красный", &["#FF0000"]).await;
    let molding = seed_molding(&pool, red.id, "Red", "пластик", 20, 500).await;

    assert!(ColorRepo::delete(&pool, red.id).await.unwrap());
    assert!(FrameMoldingRepo::find_by_id(&pool, molding.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: facets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_molding_filters_list_distinct_values(pool: PgPool) {
    let white = seed_color(&pool, "Белый", &["#FFFFFF"]).await;
    let black = seed_color(&pool, "Чёрный", &["#000000"]).await;
    let unused = seed_color(&pool, "Синий", &["#0000FF"]).await;

    seed_molding(&pool, white.id, "A", "дерево", 40, 2_000).await;
    seed_molding(&pool, black.id, "B", "алюминий", 20, 1_000).await;
    seed_molding(&pool, white.id, "C", "дерево", 20, 2_000).await;

    let facets = FilterRepo::molding_filters(&pool).await.unwrap();

    let eng: Vec<&str> = facets.iter().map(|f| f.eng_name).collect();
    assert_eq!(eng, ["material", "width", "price", "color"]);
    let names: Vec<&str> = facets.iter().map(|f| f.name).collect();
    assert_eq!(names, ["материал", "размер", "цена", "цвет"]);

    assert_eq!(
        facets[0].filters,
        MoldingFacetValues::Materials(vec!["алюминий".to_string(), "дерево".to_string()])
    );
    assert_eq!(facets[1].filters, MoldingFacetValues::Widths(vec![20, 40]));
    assert_eq!(
        facets[2].filters,
        MoldingFacetValues::Prices(vec![Decimal::new(1_000, 2), Decimal::new(2_000, 2)])
    );

    let MoldingFacetValues::Colors(colors) = &facets[3].filters else {
        panic!("color facet should hold colors");
    };
    let color_ids: Vec<DbId> = colors.iter().map(|c| c.id).collect();
    assert_eq!(color_ids, vec![white.id, black.id]);
    assert!(!color_ids.contains(&unused.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_molding_filters_on_empty_catalog(pool: PgPool) {
    let facets = FilterRepo::molding_filters(&pool).await.unwrap();

    assert_eq!(facets.len(), 4);
    assert!(facets.iter().all(|f| f.filters.is_empty()));
}
