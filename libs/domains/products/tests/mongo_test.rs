//! Integration tests for the Products domain
//!
//! These run against a real MongoDB via testcontainers to check that
//! filters, sorting, paging and upserts translate correctly.
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_products::*;
use ::mongodb::Database;
use ::mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use test_utils::{TestDataBuilder, TestMongo};

async fn seed(db: &Database, docs: Vec<Document>) -> MongoProductRepository {
    db.collection::<Document>("products")
        .insert_many(docs)
        .await
        .unwrap();

    let repo = MongoProductRepository::new(db);
    repo.init_indexes().await.unwrap();
    repo
}

fn showroom(builder: &TestDataBuilder) -> Vec<Document> {
    vec![
        doc! { "_id": builder.object_id(1), "ProductName": "Retro Radio", "BrandName": "Sony", "Category": "Audio", "Price": 9.99 },
        doc! { "_id": builder.object_id(2), "ProductName": "Walkman", "BrandName": "Sony", "Category": "Audio", "Price": Bson::Int32(10) },
        doc! { "_id": builder.object_id(3), "ProductName": "Trinitron TV (1968)", "BrandName": "Sony", "Category": "Television", "Price": 50.0 },
        doc! { "_id": builder.object_id(4), "ProductName": "Boombox", "BrandName": "Philips", "Category": "Audio", "Price": 50.01 },
        doc! { "_id": builder.object_id(5), "ProductName": "Color Set", "BrandName": "LG", "Category": "Vintage Radio", "Price": 30.0 },
        doc! { "_id": builder.object_id(6), "ProductName": "Mystery Gadget", "Category": "Gadgets" },
    ]
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_text_search_is_case_insensitive_and_literal() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_text_search");
    let repo = seed(&mongo.database(&builder.database_name()), showroom(&builder)).await;

    let radio = ProductQuery::new().text_search("RADIO");
    assert_eq!(repo.count(&radio).await.unwrap(), 2);

    // Regex metacharacters are matched literally
    let paren = ProductQuery::new().text_search("(1968");
    assert_eq!(repo.count(&paren).await.unwrap(), 1);

    let wildcard = ProductQuery::new().text_search(".*");
    assert_eq!(repo.count(&wildcard).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_filters_combine_with_inclusive_price_bounds() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_filters");
    let repo = seed(&mongo.database(&builder.database_name()), showroom(&builder)).await;

    let query = ProductQuery::new().price_range(Some(10.0), Some(50.0));
    let page = repo
        .list(&query, &SortSpec::default(), PageRequest::default())
        .await
        .unwrap();

    let prices: Vec<f64> = page.iter().filter_map(|p| p.price).collect();
    assert_eq!(prices, vec![10.0, 30.0, 50.0]);

    let sony_audio = ProductQuery::new().brand("Sony").category("Audio");
    assert_eq!(repo.count(&sony_audio).await.unwrap(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_paging_and_descending_sort() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_paging");
    let docs = (1..=20u32)
        .map(|n| doc! { "_id": builder.object_id(n), "ProductName": format!("Item {}", n), "Price": f64::from(n) })
        .collect();
    let repo = seed(&mongo.database(&builder.database_name()), docs).await;

    let second = repo
        .list(
            &ProductQuery::new(),
            &SortSpec::default(),
            PageRequest { page: 1, size: 9 },
        )
        .await
        .unwrap();
    let prices: Vec<f64> = second.iter().filter_map(|p| p.price).collect();
    assert_eq!(prices, (10..=18).map(f64::from).collect::<Vec<_>>());

    let past_end = repo
        .list(
            &ProductQuery::new(),
            &SortSpec::default(),
            PageRequest { page: 5, size: 9 },
        )
        .await
        .unwrap();
    assert!(past_end.is_empty());

    let desc = repo
        .list(
            &ProductQuery::new(),
            &SortSpec::new(Some("Price"), SortOrder::Desc),
            PageRequest { page: 0, size: 3 },
        )
        .await
        .unwrap();
    let prices: Vec<f64> = desc.iter().filter_map(|p| p.price).collect();
    assert_eq!(prices, vec![20.0, 19.0, 18.0]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_distinct_reports_missing_as_none() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_distinct");
    let repo = seed(&mongo.database(&builder.database_name()), showroom(&builder)).await;

    let mut brands = repo.distinct(DistinctField::Brand).await.unwrap();
    brands.sort();

    assert_eq!(
        brands,
        vec![
            None,
            Some("LG".to_string()),
            Some("Philips".to_string()),
            Some("Sony".to_string()),
        ]
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_image_updates_then_creates() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_upsert_image");
    let repo = seed(&mongo.database(&builder.database_name()), showroom(&builder)).await;

    let existing = builder.object_id(2);
    let updated = repo
        .upsert_image(existing, "https://img.example/walkman.png".into())
        .await
        .unwrap();
    assert_eq!(updated.matched_count, 1);
    assert_eq!(updated.modified_count, 1);
    assert!(updated.upserted_id.is_none());

    let stored = repo.get_by_id(existing).await.unwrap().unwrap();
    assert_eq!(stored.product_image.as_deref(), Some("https://img.example/walkman.png"));
    assert_eq!(stored.product_name.as_deref(), Some("Walkman"));

    let fresh = ObjectId::new();
    let created = repo
        .upsert_image(fresh, "https://img.example/new.png".into())
        .await
        .unwrap();
    assert_eq!(created.upserted_count, 1);
    assert_eq!(created.upserted_id, Some(fresh.to_hex()));
    assert_eq!(repo.find_all().await.unwrap().len(), 7);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_by_id_missing_is_none() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_get_missing");
    let repo = seed(&mongo.database(&builder.database_name()), showroom(&builder)).await;

    assert!(repo.get_by_id(ObjectId::new()).await.unwrap().is_none());
}
