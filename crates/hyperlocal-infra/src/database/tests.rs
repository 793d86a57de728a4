use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, Value};

use hyperlocal_core::domain::{NewPost, NewUser};
use hyperlocal_core::ports::{PostRepository, UserRepository};

use crate::database::entity::user;
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn user_row(id: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("username", Value::from("ann")),
        ("email", Value::from("ann@example.com")),
        ("phone", Value::from("")),
        ("rating", Value::from(0.0_f64)),
        ("rating_count", Value::from(0_i32)),
    ])
}

#[tokio::test]
async fn credentials_lookup_maps_the_first_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_row(3)]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let user = repo
        .find_by_credentials("ann@example.com", "pw")
        .await
        .unwrap()
        .expect("row should match");

    assert_eq!(user.id, 3);
    assert_eq!(user.username, "ann");
    assert_eq!(user.rating_count, 0);
}

#[tokio::test]
async fn credentials_lookup_without_match_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let result = repo.find_by_credentials("ann@example.com", "nope").await;
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn create_user_returns_the_generated_id() {
    let now = chrono::Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 1,
            username: "ann".to_owned(),
            email: "ann@example.com".to_owned(),
            password: "pw".to_owned(),
            phone: String::new(),
            rating: 0.0,
            rating_count: 0,
            created_at: now.into(),
        }]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let user = repo
        .create(NewUser {
            username: "ann".to_owned(),
            email: "ann@example.com".to_owned(),
            password: "pw".to_owned(),
            phone: String::new(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.rating, 0.0);
    assert_eq!(user.rating_count, 0);
}

#[tokio::test]
async fn store_errors_surface_the_backend_message() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);

    // No results queued: the mock reports an execution error, which the
    // gateway folds into its single generic failure type.
    let err = repo
        .create(NewPost {
            user_id: 1,
            kind: "lost_pet".to_owned(),
            title: "Lost Dog".to_owned(),
            description: String::new(),
            lat: 12.5,
            lng: 77.6,
            contact: String::new(),
        })
        .await
        .unwrap_err();

    assert!(!err.to_string().is_empty());
}
