use campus_portal::{
    bootstrap::{is_base_admin, seed_base_admin},
    config::AppConfig,
    credentials::verify_password,
    repository::{InMemoryRepository, Repository},
};

#[tokio::test]
async fn test_seeding_creates_the_base_admin() {
    let repo = InMemoryRepository::new();
    let config = AppConfig::default();

    seed_base_admin(&repo, &config).await.unwrap();

    let admin = repo
        .find_admin_by_email(&config.base_admin_email)
        .await
        .unwrap()
        .expect("base admin must exist after seeding");
    assert_eq!(admin.email, config.base_admin_email);
}

#[tokio::test]
async fn test_seeded_password_is_hashed_not_stored() {
    let repo = InMemoryRepository::new();
    let config = AppConfig::default();

    seed_base_admin(&repo, &config).await.unwrap();

    let admin = repo
        .find_admin_by_email(&config.base_admin_email)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(admin.password_hash, config.base_admin_password);
    verify_password(config.base_admin_password.clone(), admin.password_hash)
        .await
        .expect("seeded hash must verify against the configured password");
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let repo = InMemoryRepository::new();
    let config = AppConfig::default();

    seed_base_admin(&repo, &config).await.unwrap();
    let first = repo
        .find_admin_by_email(&config.base_admin_email)
        .await
        .unwrap()
        .unwrap();

    // A second run (a restart) changes nothing, not even the id.
    seed_base_admin(&repo, &config).await.unwrap();
    let admins = repo.list_admins().await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].id, first.id);
    assert_eq!(admins[0].password_hash, first.password_hash);
}

#[test]
fn test_is_base_admin_matches_case_insensitively() {
    let config = AppConfig::default();
    assert!(is_base_admin(&config, &config.base_admin_email));
    assert!(is_base_admin(&config, &config.base_admin_email.to_uppercase()));
    assert!(is_base_admin(
        &config,
        &format!("  {}  ", config.base_admin_email)
    ));
    assert!(!is_base_admin(&config, "someone-else@portal.edu"));
}
