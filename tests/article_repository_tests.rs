// tests/article_repository_tests.rs
//
// Contract tests for the article store, executed against both backends from
// the same test bodies so the collection- and SQLite-backed implementations
// cannot drift apart.
use std::sync::Arc;

mod support;

use cafe_core::domain::article::{
    Article, ArticleContents, ArticleId, ArticleRepository, ArticleTitle,
};
use cafe_core::domain::user::WriterId;
use cafe_core::infrastructure::repositories::{MemoryArticleRepository, SqliteArticleRepository};

fn sample_article(writer: &str, title: &str) -> Article {
    Article::new(
        WriterId::new(writer).unwrap(),
        ArticleTitle::new(title).unwrap(),
        ArticleContents::new("contents").unwrap(),
        support::fixed_now(),
    )
}

fn memory_repo() -> Arc<dyn ArticleRepository> {
    Arc::new(MemoryArticleRepository::new())
}

async fn sqlite_repo() -> Arc<dyn ArticleRepository> {
    let pool = Arc::new(support::sqlite_pool().await);
    Arc::new(SqliteArticleRepository::new(pool))
}

/* ------------------------------ save / find ------------------------------ */

async fn save_assigns_identifier_and_round_trips(repo: Arc<dyn ArticleRepository>) {
    let saved = repo.save(sample_article("writer", "title")).await.unwrap();

    let id = saved.id.expect("id assigned on first save");
    assert_eq!(saved.writer.as_str(), "writer");
    assert_eq!(saved.title.as_str(), "title");
    assert_eq!(saved.contents.as_str(), "contents");

    let found = repo.find_by_id(id).await.unwrap().expect("stored article");
    assert_eq!(found.writer.as_str(), "writer");
    assert_eq!(found.title.as_str(), "title");
    assert_eq!(found.contents.as_str(), "contents");
    assert_eq!(found, saved);
}

#[tokio::test]
async fn memory_save_assigns_identifier_and_round_trips() {
    save_assigns_identifier_and_round_trips(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_save_assigns_identifier_and_round_trips() {
    save_assigns_identifier_and_round_trips(sqlite_repo().await).await;
}

async fn saving_with_identifier_updates_instead_of_duplicating(repo: Arc<dyn ArticleRepository>) {
    let mut saved = repo.save(sample_article("writer", "title")).await.unwrap();
    saved.update(
        ArticleTitle::new("new title").unwrap(),
        ArticleContents::new("new contents").unwrap(),
    );

    let updated = repo.save(saved.clone()).await.unwrap();
    assert_eq!(updated.id, saved.id);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title.as_str(), "new title");
    assert_eq!(all[0].contents.as_str(), "new contents");
    // Immutable fields survive the update untouched.
    assert_eq!(all[0].writer.as_str(), "writer");
    assert_eq!(all[0].created_at, support::fixed_now());
}

#[tokio::test]
async fn memory_saving_with_identifier_updates_instead_of_duplicating() {
    saving_with_identifier_updates_instead_of_duplicating(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_saving_with_identifier_updates_instead_of_duplicating() {
    saving_with_identifier_updates_instead_of_duplicating(sqlite_repo().await).await;
}

async fn identifiers_are_distinct_and_increasing(repo: Arc<dyn ArticleRepository>) {
    let mut ids = Vec::new();
    for n in 0..5 {
        let saved = repo
            .save(sample_article("writer", &format!("title {n}")))
            .await
            .unwrap();
        ids.push(i64::from(saved.id.unwrap()));
    }

    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids must increase: {ids:?}");
    }
}

#[tokio::test]
async fn memory_identifiers_are_distinct_and_increasing() {
    identifiers_are_distinct_and_increasing(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_identifiers_are_distinct_and_increasing() {
    identifiers_are_distinct_and_increasing(sqlite_repo().await).await;
}

async fn saving_an_unknown_identifier_updates_nothing(repo: Arc<dyn ArticleRepository>) {
    let ghost = sample_article("writer", "title").with_id(ArticleId::new(999).unwrap());

    // No existence check happens before the insert/update decision, so this
    // silently updates zero rows.
    let returned = repo.save(ghost).await.unwrap();
    assert_eq!(returned.id, Some(ArticleId::new(999).unwrap()));

    assert!(repo.find_all().await.unwrap().is_empty());
    assert!(
        repo.find_by_id(ArticleId::new(999).unwrap())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn memory_saving_an_unknown_identifier_updates_nothing() {
    saving_an_unknown_identifier_updates_nothing(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_saving_an_unknown_identifier_updates_nothing() {
    saving_an_unknown_identifier_updates_nothing(sqlite_repo().await).await;
}

/* ------------------------------ find_all ------------------------------ */

async fn find_all_returns_articles_in_insertion_order(repo: Arc<dyn ArticleRepository>) {
    for title in ["first", "second", "third"] {
        repo.save(sample_article("writer", title)).await.unwrap();
    }

    let titles: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|article| article.title.into())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn memory_find_all_returns_articles_in_insertion_order() {
    find_all_returns_articles_in_insertion_order(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_find_all_returns_articles_in_insertion_order() {
    find_all_returns_articles_in_insertion_order(sqlite_repo().await).await;
}

async fn find_by_unknown_identifier_is_absent_not_an_error(repo: Arc<dyn ArticleRepository>) {
    let found = repo.find_by_id(ArticleId::new(999_999).unwrap()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn memory_find_by_unknown_identifier_is_absent_not_an_error() {
    find_by_unknown_identifier_is_absent_not_an_error(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_find_by_unknown_identifier_is_absent_not_an_error() {
    find_by_unknown_identifier_is_absent_not_an_error(sqlite_repo().await).await;
}

/* ------------------------------ delete ------------------------------ */

async fn delete_by_id_removes_record_and_ignores_unknown_ids(repo: Arc<dyn ArticleRepository>) {
    let saved = repo.save(sample_article("writer", "title")).await.unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    // Deleting the same id again is a no-op.
    repo.delete_by_id(id).await.unwrap();
}

#[tokio::test]
async fn memory_delete_by_id_removes_record_and_ignores_unknown_ids() {
    delete_by_id_removes_record_and_ignores_unknown_ids(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_delete_by_id_removes_record_and_ignores_unknown_ids() {
    delete_by_id_removes_record_and_ignores_unknown_ids(sqlite_repo().await).await;
}

async fn identifiers_are_not_reused_after_deletion(repo: Arc<dyn ArticleRepository>) {
    let first = repo.save(sample_article("writer", "first")).await.unwrap();
    let first_id = i64::from(first.id.unwrap());

    repo.delete_by_id(first.id.unwrap()).await.unwrap();

    let second = repo.save(sample_article("writer", "second")).await.unwrap();
    assert!(i64::from(second.id.unwrap()) > first_id);
}

#[tokio::test]
async fn memory_identifiers_are_not_reused_after_deletion() {
    identifiers_are_not_reused_after_deletion(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_identifiers_are_not_reused_after_deletion() {
    identifiers_are_not_reused_after_deletion(sqlite_repo().await).await;
}

async fn delete_all_clears_store_but_keeps_retiring_identifiers(repo: Arc<dyn ArticleRepository>) {
    let before = repo.save(sample_article("writer", "before")).await.unwrap();
    repo.delete_all().await.unwrap();
    assert!(repo.find_all().await.unwrap().is_empty());

    let after = repo.save(sample_article("writer", "after")).await.unwrap();
    assert!(i64::from(after.id.unwrap()) > i64::from(before.id.unwrap()));
}

#[tokio::test]
async fn memory_delete_all_clears_store_but_keeps_retiring_identifiers() {
    delete_all_clears_store_but_keeps_retiring_identifiers(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_delete_all_clears_store_but_keeps_retiring_identifiers() {
    delete_all_clears_store_but_keeps_retiring_identifiers(sqlite_repo().await).await;
}
