//! Library repository: remote-first reads with local-cache fallback.

use crate::{GameRef, LibraryApi, LibraryError, LibraryItem};
use steamish_store::{keys, Store};
use tracing::{debug, warn};

/// Which path served a library read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibrarySource {
    /// The remote service answered.
    Remote,
    /// The remote call failed and the local store copy was substituted.
    LocalFallback,
}

/// A completed library load, tagged with its source.
#[derive(Debug)]
pub struct LibraryLoad {
    pub items: Vec<LibraryItem>,
    pub source: LibrarySource,
}

/// Per-user library over the remote service and the local store.
///
/// The remote service is the source of truth. The local copy is written only
/// by the local mutation path ([`add_local`](Self::add_local)), never
/// repopulated from a successful remote read, so the two can diverge; reads
/// that fall back may therefore be stale. No retry follows a failed remote
/// call.
pub struct LibraryRepository {
    api: LibraryApi,
    store: Store,
}

impl LibraryRepository {
    pub fn new(api: LibraryApi, store: Store) -> Self {
        Self { api, store }
    }

    /// Load the user's library, tagged with which path served it.
    ///
    /// Any remote failure, network or decode, falls back to the local copy
    /// immediately.
    pub async fn load_library(&self, user_id: i64) -> LibraryLoad {
        match self.api.fetch_library(user_id).await {
            Ok(items) => {
                debug!(user_id, count = items.len(), "library loaded from remote");
                LibraryLoad {
                    items,
                    source: LibrarySource::Remote,
                }
            }
            Err(e) => {
                warn!(user_id, error = %e, "remote library fetch failed, using local copy");
                LibraryLoad {
                    items: self.local_items(user_id),
                    source: LibrarySource::LocalFallback,
                }
            }
        }
    }

    /// Load the user's library; never errors.
    pub async fn get_library(&self, user_id: i64) -> Vec<LibraryItem> {
        self.load_library(user_id).await.items
    }

    /// Create an ownership record on the remote service.
    ///
    /// Write failures surface to the caller; there is no local fallback for
    /// writes.
    pub async fn add_to_library(
        &self,
        user_id: i64,
        game_id: GameRef,
    ) -> Result<LibraryItem, LibraryError> {
        let item = self.api.create_item(user_id, &game_id).await?;
        debug!(user_id, game = %game_id, "added to remote library");
        Ok(item)
    }

    /// Remote existence check for one game.
    pub async fn is_in_library(
        &self,
        user_id: i64,
        game_id: &GameRef,
    ) -> Result<bool, LibraryError> {
        self.api.check_owned(user_id, game_id).await
    }

    /// Delete an ownership record on the remote service.
    pub async fn remove_from_library(
        &self,
        user_id: i64,
        game_id: &GameRef,
    ) -> Result<(), LibraryError> {
        self.api.delete_item(user_id, game_id).await
    }

    /// The local store copy of the user's library.
    pub fn local_items(&self, user_id: i64) -> Vec<LibraryItem> {
        self.store.get_collection(&keys::library(user_id))
    }

    /// Insert into the local copy, deduped on record id.
    ///
    /// Returns `Ok(true)` iff the item was inserted, `Ok(false)` if an item
    /// with the same id was already present.
    pub fn add_local(&self, user_id: i64, item: LibraryItem) -> Result<bool, LibraryError> {
        let mut items = self.local_items(user_id);
        if items.iter().any(|existing| existing.id == item.id) {
            return Ok(false);
        }
        items.push(item);
        self.store.set_collection(&keys::library(user_id), &items)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_against(uri: &str) -> LibraryRepository {
        LibraryRepository::new(LibraryApi::new(uri), Store::in_memory())
    }

    #[tokio::test]
    async fn remote_success_is_tagged_remote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": { "libraryItemResponseList": [] }
            })))
            .mount(&server)
            .await;

        let load = repo_against(&server.uri()).load_library(1).await;
        assert_eq!(load.source, LibrarySource::Remote);
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_an_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        // Never errors, even with an empty local copy.
        let items = repo_against(&server.uri()).get_library(1).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn unreachable_service_falls_back_to_local_copy() {
        // Nothing is listening on this address.
        let repo = repo_against("http://127.0.0.1:1");
        repo.add_local(1, LibraryItem::local(5, 1, 7, "Kingdom of Ash", 44.99))
            .unwrap();

        let load = repo.load_library(1).await;
        assert_eq!(load.source, LibrarySource::LocalFallback);
        assert_eq!(load.items.len(), 1);
        assert_eq!(load.items[0].id, 5);
    }

    #[tokio::test]
    async fn successful_remote_read_does_not_touch_the_local_copy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": { "libraryItemResponseList": [{
                    "id": 9, "userId": 1, "juegoId": 2, "name": "Starforge Chronicles",
                    "price": 59.99, "dateAdded": "2024-01-01", "status": "owned"
                }] }
            })))
            .mount(&server)
            .await;

        let repo = repo_against(&server.uri());
        let items = repo.get_library(1).await;
        assert_eq!(items.len(), 1);
        // The local copy only grows through add_local.
        assert!(repo.local_items(1).is_empty());
    }

    #[tokio::test]
    async fn add_to_library_surfaces_remote_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/library"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let result = repo_against(&server.uri())
            .add_to_library(1, GameRef::Id(7))
            .await;
        assert!(matches!(result, Err(LibraryError::Http { status: 409, .. })));
    }

    #[test]
    fn add_local_dedupes_on_record_id() {
        let repo = repo_against("http://unused.invalid");
        let item = LibraryItem::local(5, 1, 7, "Kingdom of Ash", 44.99);
        assert!(repo.add_local(1, item.clone()).unwrap());
        assert!(!repo.add_local(1, item).unwrap());
        assert_eq!(repo.local_items(1).len(), 1);
    }

    #[test]
    fn local_copies_are_scoped_per_user() {
        let repo = repo_against("http://unused.invalid");
        repo.add_local(1, LibraryItem::local(5, 1, 7, "Kingdom of Ash", 44.99))
            .unwrap();
        assert!(repo.local_items(2).is_empty());
    }
}
