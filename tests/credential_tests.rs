//! Integration tests for the credential store service over a real
//! SQLite database.

use adminarr::config::SecurityConfig;
use adminarr::db::{Store, hash_password};
use adminarr::services::{CredentialError, CredentialService, SeaOrmCredentialService};

async fn spawn_service(allow_hash_listing: bool) -> (SeaOrmCredentialService, Store) {
    let db_path = std::env::temp_dir().join(format!("adminarr-test-{}.db", uuid::Uuid::new_v4()));

    let store = Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to create store");

    let service = SeaOrmCredentialService::new(store.clone(), SecurityConfig { allow_hash_listing });
    (service, store)
}

#[tokio::test]
async fn register_then_authenticate_succeeds() {
    let (service, _) = spawn_service(false).await;

    service.register("alice", "s3cret").await.unwrap();

    assert!(service.authenticate("alice", "s3cret").await.unwrap());
}

#[tokio::test]
async fn duplicate_register_fails_and_keeps_original() {
    let (service, store) = spawn_service(false).await;

    service.register("bob", "first-password").await.unwrap();
    let original = store.get_admin_by_username("bob").await.unwrap().unwrap();

    let err = service.register("bob", "other-password").await.unwrap_err();
    assert!(matches!(err, CredentialError::DuplicateUsername(ref u) if u == "bob"));

    // The original row is unmodified and remains the only "bob".
    let admins = store.list_admins().await.unwrap();
    let bobs: Vec<_> = admins.iter().filter(|a| a.username == "bob").collect();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].id, original.id);
    assert_eq!(bobs[0].password_hash, original.password_hash);
    assert_eq!(bobs[0].registered_at, original.registered_at);

    assert!(service.authenticate("bob", "first-password").await.unwrap());
    assert!(!service.authenticate("bob", "other-password").await.unwrap());
}

#[tokio::test]
async fn unique_index_blocks_direct_double_insert() {
    let (_, store) = spawn_service(false).await;

    store.register_admin("pat", "pw").await.unwrap();

    // Bypass the service pre-check: the storage-level unique index alone
    // must reject the second insert.
    let err = store.register_admin("pat", "other-pw").await.unwrap_err();
    let db_err = err
        .downcast_ref::<sea_orm::DbErr>()
        .expect("expected a database error");
    assert!(matches!(
        db_err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    let admins = store.list_admins().await.unwrap();
    assert_eq!(admins.iter().filter(|a| a.username == "pat").count(), 1);
}

#[tokio::test]
async fn authenticate_rejects_wrong_password_and_unknown_user() {
    let (service, _) = spawn_service(false).await;

    service.register("carol", "right").await.unwrap();

    assert!(!service.authenticate("carol", "wrong").await.unwrap());
    assert!(!service.authenticate("nobody", "right").await.unwrap());
}

#[tokio::test]
async fn authenticate_rejects_empty_credentials() {
    let (service, _) = spawn_service(false).await;

    let err = service.authenticate("", "x").await.unwrap_err();
    assert!(matches!(err, CredentialError::EmptyCredentials));

    let err = service.authenticate("x", "   ").await.unwrap_err();
    assert!(matches!(err, CredentialError::EmptyCredentials));

    let err = service.register("x", "").await.unwrap_err();
    assert!(matches!(err, CredentialError::EmptyCredentials));
}

#[tokio::test]
async fn append_log_preserves_display_order() {
    let (service, store) = spawn_service(false).await;

    service.register("dave", "pw").await.unwrap();
    service.append_log("dave", "A").await.unwrap();
    service.append_log("dave", "B").await.unwrap();

    let admin = store.get_admin_by_username("dave").await.unwrap().unwrap();
    let log = admin.action_log.unwrap();
    assert!(log.ends_with("A; B"), "log was: {log}");

    // Registration seeded the first entry.
    assert!(log.starts_with("account registered"), "log was: {log}");
}

#[tokio::test]
async fn delete_removes_account_and_keeps_audit_trail() {
    let (service, _) = spawn_service(false).await;

    service.register("erin", "pw").await.unwrap();
    service.delete("erin").await.unwrap();

    assert!(!service.authenticate("erin", "pw").await.unwrap());

    // Structured events outlive the row itself.
    let events = service.events_for("erin").await.unwrap();
    let labels: Vec<_> = events.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["account registered", "account deleted"]);
}

#[tokio::test]
async fn delete_unknown_username_errors() {
    let (service, _) = spawn_service(false).await;

    let err = service.delete("ghost").await.unwrap_err();
    assert!(matches!(err, CredentialError::UnknownUsername(ref u) if u == "ghost"));
}

#[tokio::test]
async fn register_authenticate_delete_scenario() {
    let (service, _) = spawn_service(false).await;

    service.register("alice", "s3cret").await.unwrap();
    assert!(service.authenticate("alice", "s3cret").await.unwrap());
    assert!(!service.authenticate("alice", "wrong").await.unwrap());

    service.delete("alice").await.unwrap();
    assert!(!service.authenticate("alice", "s3cret").await.unwrap());
}

#[tokio::test]
async fn update_identity_renames_in_place() {
    let (service, store) = spawn_service(false).await;

    service.register("frank", "old-pw").await.unwrap();
    let before = store.get_admin_by_username("frank").await.unwrap().unwrap();

    service
        .update_identity("frank", "francis", "new-pw")
        .await
        .unwrap();

    assert!(store.get_admin_by_username("frank").await.unwrap().is_none());

    let after = store.get_admin_by_username("francis").await.unwrap().unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.registered_at, before.registered_at);

    assert!(!service.authenticate("frank", "old-pw").await.unwrap());
    assert!(service.authenticate("francis", "new-pw").await.unwrap());
}

#[tokio::test]
async fn update_identity_unknown_or_taken_username_errors() {
    let (service, _) = spawn_service(false).await;

    service.register("gina", "pw").await.unwrap();
    service.register("henry", "pw").await.unwrap();

    let err = service
        .update_identity("nobody", "somebody", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, CredentialError::UnknownUsername(_)));

    let err = service
        .update_identity("gina", "henry", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, CredentialError::DuplicateUsername(ref u) if u == "henry"));
}

#[tokio::test]
async fn record_login_sets_timestamp_and_tolerates_unknown_user() {
    let (service, store) = spawn_service(false).await;

    service.register("iris", "pw").await.unwrap();

    let before = store.get_admin_by_username("iris").await.unwrap().unwrap();
    assert!(before.last_login_at.is_none());

    service.record_login("iris").await.unwrap();

    let after = store.get_admin_by_username("iris").await.unwrap().unwrap();
    assert!(after.last_login_at.is_some());

    // No matching row is not an error.
    service.record_login("nobody").await.unwrap();
}

#[tokio::test]
async fn login_orchestrates_timestamp_and_log() {
    let (service, store) = spawn_service(false).await;

    service.register("judy", "pw").await.unwrap();

    let err = service.login("judy", "wrong").await.unwrap_err();
    assert!(matches!(err, CredentialError::AuthenticationFailed));

    service.login("judy", "pw").await.unwrap();

    let admin = store.get_admin_by_username("judy").await.unwrap().unwrap();
    assert!(admin.last_login_at.is_some());
    assert!(admin.action_log.unwrap().ends_with("logged in"));
}

#[tokio::test]
async fn list_accounts_never_exposes_digests() {
    let (service, _) = spawn_service(false).await;

    service.register("kate", "pw").await.unwrap();

    let accounts = service.list_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].username, "kate");

    let json = serde_json::to_string(&accounts).unwrap();
    assert!(!json.contains(&hash_password("pw")));
}

#[tokio::test]
async fn hash_listing_is_gated_by_config() {
    let (service, _) = spawn_service(false).await;
    service.register("leo", "pw").await.unwrap();

    let err = service.list_accounts_with_hashes().await.unwrap_err();
    assert!(matches!(err, CredentialError::HashListingDisabled));

    let (service, _) = spawn_service(true).await;
    service.register("leo", "pw").await.unwrap();

    let admins = service.list_accounts_with_hashes().await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].password_hash, hash_password("pw"));
}

#[tokio::test]
async fn list_action_logs_only_returns_rows_with_logs() {
    let (service, store) = spawn_service(false).await;

    service.register("mona", "pw").await.unwrap();

    // record_login leaves ActionLog untouched, so wipe the registration
    // entry to fabricate a row without a log.
    use sea_orm::{ConnectionTrait, Statement};
    store
        .conn
        .execute(Statement::from_string(
            store.conn.get_database_backend(),
            r#"UPDATE "Administrators" SET "ActionLog" = NULL WHERE "Username" = 'mona'"#.to_string(),
        ))
        .await
        .unwrap();

    service.register("nick", "pw").await.unwrap();

    let logs = service.list_action_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].0, "nick");
}

#[tokio::test]
async fn per_user_lookup_matches_action_log_listing() {
    let (service, store) = spawn_service(false).await;

    service.register("rosa", "pw").await.unwrap();
    service.append_log("rosa", "A").await.unwrap();

    let direct = store
        .get_admin_by_username("rosa")
        .await
        .unwrap()
        .unwrap()
        .action_log
        .unwrap();

    let listed = service.list_action_logs().await.unwrap();
    assert_eq!(listed, vec![("rosa".to_string(), direct)]);
}

#[tokio::test]
async fn recent_events_are_newest_first_and_limited() {
    let (service, _) = spawn_service(false).await;

    service.register("olga", "pw").await.unwrap();
    service.append_log("olga", "A").await.unwrap();
    service.append_log("olga", "B").await.unwrap();

    let events = service.recent_events(2).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].label, "B");
    assert_eq!(events[1].label, "A");

    let all = service.events_for("olga").await.unwrap();
    let labels: Vec<_> = all.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["account registered", "A", "B"]);
}
