//! Service-level tests exercised against the in-memory adapter.

use std::sync::Arc;

use helpboard_core::domain::{NewPost, Post, PostId};
use helpboard_core::error::DomainError;
use helpboard_core::ports::PostStore;
use helpboard_core::query::ListRequest;
use helpboard_core::service::PostService;

use super::memory::InMemoryPostStore;

fn new_post(type_id: &str) -> NewPost {
    NewPost {
        id: None,
        type_id: type_id.into(),
        title: "Ladder needed".into(),
        description: "Cleaning gutters this weekend".into(),
        location: "north".into(),
        phone_number: "555-0101".into(),
        image: None,
        fulfilled: false,
    }
}

fn stored_post(owner: &str, suffix: &str, type_id: &str, created_at: i64) -> Post {
    Post {
        id: PostId::new(owner, suffix),
        type_id: type_id.into(),
        created_at,
        title: format!("post {suffix}"),
        description: String::new(),
        location: String::new(),
        phone_number: String::new(),
        image: "N/A".into(),
        fulfilled: false,
    }
}

fn service() -> (Arc<InMemoryPostStore>, PostService) {
    let store = Arc::new(InMemoryPostStore::new());
    let service = PostService::new(store.clone());
    (store, service)
}

#[tokio::test]
async fn create_without_id_stores_distinct_records() {
    let (store, service) = service();

    let first = service.create("alice", new_post("tools")).await.unwrap();
    let second = service.create("alice", new_post("tools")).await.unwrap();

    assert_ne!(first, second);
    assert!(store.get(&first).await.unwrap().is_some());
    assert!(store.get(&second).await.unwrap().is_some());
}

#[tokio::test]
async fn create_with_owned_id_overwrites_idempotently() {
    let (store, service) = service();

    let mut input = new_post("tools");
    input.id = Some("alice#fixed".into());

    let id = service.create("alice", input.clone()).await.unwrap();
    assert_eq!(id.to_string(), "alice#fixed");

    input.title = "Ladder found, thanks!".into();
    input.fulfilled = true;
    let id = service.create("alice", input).await.unwrap();

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Ladder found, thanks!");
    assert!(stored.fulfilled);
}

#[tokio::test]
async fn create_with_foreign_id_is_rejected_without_writing() {
    let (store, service) = service();

    let mut input = new_post("tools");
    input.id = Some("alice#fixed".into());

    let err = service.create("mallory", input).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let id = PostId::new("alice", "fixed");
    assert!(store.get(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn create_defaults_missing_image_to_sentinel() {
    let (store, service) = service();

    let id = service.create("alice", new_post("tools")).await.unwrap();
    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(stored.image, "N/A");
}

#[tokio::test]
async fn create_requires_a_type() {
    let (_, service) = service();

    let err = service.create("alice", new_post("")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn delete_of_missing_id_succeeds() {
    let (_, service) = service();
    service.delete("alice", "alice#never-existed").await.unwrap();
}

#[tokio::test]
async fn delete_of_foreign_id_is_rejected_and_record_kept() {
    let (store, service) = service();
    store
        .put(stored_post("alice", "a1", "tools", 1_000))
        .await
        .unwrap();

    let err = service.delete("mallory", "alice#a1").await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
    assert!(store
        .get(&PostId::new("alice", "a1"))
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn delete_of_malformed_id_is_a_validation_error() {
    let (_, service) = service();
    let err = service.delete("alice", "no-separator").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

async fn seed_five(store: &InMemoryPostStore) {
    for (suffix, type_id, created_at) in [
        ("a1", "tools", 1_000),
        ("a2", "errands", 2_000),
        ("a3", "tools", 3_000),
        ("a4", "errands", 4_000),
        ("a5", "tools", 5_000),
    ] {
        store
            .put(stored_post("alice", suffix, type_id, created_at))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn list_by_time_is_newest_first() {
    let (store, service) = service();
    seed_five(&store).await;

    let page = service.list_by_time(ListRequest::default()).await.unwrap();
    let created: Vec<i64> = page.items.iter().map(|p| p.created_at).collect();
    assert_eq!(created, vec![5_000, 4_000, 3_000, 2_000, 1_000]);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn list_by_time_pages_walk_the_whole_partition() {
    let (store, service) = service();
    seed_five(&store).await;

    let request = |cursor: Option<String>| ListRequest {
        cursor,
        page_size: Some(2),
        ..Default::default()
    };

    let first = service.list_by_time(request(None)).await.unwrap();
    assert_eq!(
        first.items.iter().map(|p| p.created_at).collect::<Vec<_>>(),
        vec![5_000, 4_000]
    );
    let cursor = first.next_cursor.expect("more items remain");

    let second = service.list_by_time(request(Some(cursor))).await.unwrap();
    assert_eq!(
        second.items.iter().map(|p| p.created_at).collect::<Vec<_>>(),
        vec![3_000, 2_000]
    );
    let cursor = second.next_cursor.expect("one item remains");

    let last = service.list_by_time(request(Some(cursor))).await.unwrap();
    assert_eq!(
        last.items.iter().map(|p| p.created_at).collect::<Vec<_>>(),
        vec![1_000]
    );
    assert!(last.next_cursor.is_none());
}

#[tokio::test]
async fn list_by_time_applies_an_optional_type_filter() {
    let (store, service) = service();
    seed_five(&store).await;

    let page = service
        .list_by_time(ListRequest {
            type_filter: Some("errands".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(page.items.iter().all(|p| p.type_id == "errands"));
    assert_eq!(
        page.items.iter().map(|p| p.created_at).collect::<Vec<_>>(),
        vec![4_000, 2_000]
    );
}

#[tokio::test]
async fn list_by_type_with_no_matches_is_an_empty_last_page() {
    let (store, service) = service();
    seed_five(&store).await;

    let page = service
        .list_by_type(ListRequest {
            type_filter: Some("vehicles".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn list_by_type_pages_through_matching_records() {
    let (store, service) = service();
    seed_five(&store).await;

    let first = service
        .list_by_type(ListRequest {
            type_filter: Some("tools".into()),
            page_size: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    assert!(first.items.iter().all(|p| p.type_id == "tools"));
    let cursor = first.next_cursor.expect("a third tool post remains");

    let second = service
        .list_by_type(ListRequest {
            type_filter: Some("tools".into()),
            cursor: Some(cursor),
            page_size: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert!(second.next_cursor.is_none());
}

#[tokio::test]
async fn list_rejects_a_cursor_from_the_other_ordering() {
    let (store, service) = service();
    seed_five(&store).await;

    let typed = service
        .list_by_type(ListRequest {
            type_filter: Some("tools".into()),
            page_size: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    let cursor = typed.next_cursor.expect("more tool posts remain");

    let err = service
        .list_by_time(ListRequest {
            cursor: Some(cursor),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}
