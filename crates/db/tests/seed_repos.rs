//! Integration tests for the seed/writer repositories.

use sqlx::PgPool;

use dispatch_db::models::{CreateArea, CreateClient, CreateRequest};
use dispatch_db::repositories::{AreaRepo, ClientRepo, RequestRepo};

#[sqlx::test(migrations = "./migrations")]
async fn create_and_find_area_by_name(pool: PgPool) {
    let created = AreaRepo::create(
        &pool,
        &CreateArea {
            fullname_area: "North".to_string(),
        },
    )
    .await
    .unwrap();

    let found = AreaRepo::find_by_name(&pool, "North").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.fullname_area, "North");

    assert!(AreaRepo::find_by_name(&pool, "South").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn create_and_find_client_by_name(pool: PgPool) {
    let created = ClientRepo::create(
        &pool,
        &CreateClient {
            fullname_client: "Acme".to_string(),
        },
    )
    .await
    .unwrap();

    let found = ClientRepo::find_by_name(&pool, "Acme").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    assert!(ClientRepo::find_by_name(&pool, "Globex")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_display_names_are_rejected(pool: PgPool) {
    let input = CreateArea {
        fullname_area: "North".to_string(),
    };
    AreaRepo::create(&pool, &input).await.unwrap();
    let err = AreaRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn request_status_defaults_to_open(pool: PgPool) {
    let area = AreaRepo::create(
        &pool,
        &CreateArea {
            fullname_area: "North".to_string(),
        },
    )
    .await
    .unwrap();
    let client = ClientRepo::create(
        &pool,
        &CreateClient {
            fullname_client: "Acme".to_string(),
        },
    )
    .await
    .unwrap();

    let row = RequestRepo::create(
        &pool,
        &CreateRequest {
            area_id: area.id,
            client_id: client.id,
            subject: "no explicit status".to_string(),
            body: Some("details".to_string()),
            status: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(row.status, "open");
    assert_eq!(row.body.as_deref(), Some("details"));
    assert_eq!(RequestRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn request_requires_existing_area_and_client(pool: PgPool) {
    let err = RequestRepo::create(
        &pool,
        &CreateRequest {
            area_id: 9999,
            client_id: 9999,
            subject: "dangling".to_string(),
            body: None,
            status: None,
        },
    )
    .await
    .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_foreign_key_violation());
}
