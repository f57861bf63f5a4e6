//! Runs against a real PostgreSQL instance:
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`
use chrono::Utc;
use users_service::{
    domain::{
        errors::DomainError,
        models::{NewUser, UserChanges},
        repositories::UserRepository,
    },
    infrastructure::{database, repositories::PostgresUserRepository},
};

async fn repository() -> std::sync::Arc<PostgresUserRepository> {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = database::create_pool(&url, 2).await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    sqlx::query("TRUNCATE users RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();
    PostgresUserRepository::new(pool)
}

fn new_user(id: Option<i64>) -> NewUser {
    NewUser {
        id,
        first_name: "Ana".to_string(),
        last_name: "Ruiz".to_string(),
        address: None,
        phone: 600111222,
        created_at: Utc::now(),
    }
}

// Shares one database, so everything runs in a single test.
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn postgres_user_lifecycle() {
    let repo = repository().await;

    let explicit = repo.insert(new_user(Some(20))).await.unwrap();
    assert_eq!(explicit.id, 20);

    let assigned = repo.insert(new_user(None)).await.unwrap();
    assert_eq!(assigned.id, 21);

    let err = repo.insert(new_user(Some(20))).await.unwrap_err();
    assert!(matches!(err, DomainError::AlreadyExists(_)));
    assert_eq!(err.to_string(), "Entity already exists: user 20");

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![20, 21]);

    let updated = repo
        .update(
            20,
            UserChanges {
                first_name: "Ana".to_string(),
                last_name: "Ruiz".to_string(),
                address: Some("Calle Mayor 1".to_string()),
                phone: 600999888,
                created_at: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, 20);
    assert_eq!(updated.phone, 600999888);
    assert_eq!(updated.created_at, explicit.created_at);

    assert!(repo.delete(20).await.unwrap());
    assert!(repo.get(20).await.unwrap().is_none());
    assert!(!repo.delete(20).await.unwrap());
    assert!(
        repo.update(
            20,
            UserChanges {
                first_name: "x".to_string(),
                last_name: "y".to_string(),
                address: None,
                phone: 0,
                created_at: None,
            }
        )
        .await
        .unwrap()
        .is_none()
    );
    assert_eq!(repo.list().await.unwrap().len(), 1);

    // explicit id 22 is the next one the sequence would hand out
    let explicit = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.insert(new_user(Some(22))).await })
    };
    let assigned: Vec<_> = (0..10)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.insert(new_user(None)).await })
        })
        .collect();

    match explicit.await.unwrap() {
        Ok(user) => assert_eq!(user.id, 22),
        Err(err) => assert!(matches!(err, DomainError::AlreadyExists(_))),
    }
    for handle in assigned {
        handle.await.unwrap().unwrap();
    }
    let users = repo.list().await.unwrap();
    let mut ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), users.len());
    assert!(users.iter().any(|u| u.id == 22));
}
