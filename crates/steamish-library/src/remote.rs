//! HTTP client for the remote library service.
//!
//! Each endpoint decodes into a named schema; collections arrive wrapped in
//! the service's `_embedded.<listName>` envelope, singular resources as bare
//! objects, existence checks as `{"owns": bool}`. Anything that doesn't
//! match decodes to a typed [`LibraryError::Decode`] instead of being
//! coerced.

use crate::{GameRef, LibraryError, LibraryItem};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// `_embedded` envelope around a collection payload.
#[derive(Debug, Deserialize)]
struct Embedded<T> {
    #[serde(rename = "_embedded")]
    embedded: T,
}

/// Collection payload for library reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryItemList {
    #[serde(default)]
    library_item_response_list: Vec<LibraryItem>,
}

/// Existence-check payload.
#[derive(Debug, Deserialize)]
struct OwnsResponse {
    owns: bool,
}

/// Create-request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddRequest<'a> {
    user_id: i64,
    #[serde(rename = "juegoId")]
    game_id: &'a GameRef,
}

/// Client for the library service.
pub struct LibraryApi {
    client: reqwest::Client,
    base_url: String,
}

impl LibraryApi {
    /// Create a client against a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode a 2xx response body against `T`, non-2xx into `Http`.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, LibraryError> {
        let url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            return Err(LibraryError::Http {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| LibraryError::Decode { url, source })
    }

    /// `GET /library/{userId}` — the user's full library.
    pub async fn fetch_library(&self, user_id: i64) -> Result<Vec<LibraryItem>, LibraryError> {
        let response = self
            .client
            .get(self.url(&format!("/library/{user_id}")))
            .send()
            .await?;
        let envelope: Embedded<LibraryItemList> = Self::decode(response).await?;
        Ok(envelope.embedded.library_item_response_list)
    }

    /// `POST /library` — create an ownership record.
    pub async fn create_item(
        &self,
        user_id: i64,
        game_id: &GameRef,
    ) -> Result<LibraryItem, LibraryError> {
        let response = self
            .client
            .post(self.url("/library"))
            .json(&AddRequest { user_id, game_id })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /library/{userId}/{gameId}/owns` — existence check.
    pub async fn check_owned(
        &self,
        user_id: i64,
        game_id: &GameRef,
    ) -> Result<bool, LibraryError> {
        let response = self
            .client
            .get(self.url(&format!("/library/{user_id}/{game_id}/owns")))
            .send()
            .await?;
        let owns: OwnsResponse = Self::decode(response).await?;
        Ok(owns.owns)
    }

    /// `DELETE /library/{userId}/{gameId}` — remove by composite key.
    pub async fn delete_item(
        &self,
        user_id: i64,
        game_id: &GameRef,
    ) -> Result<(), LibraryError> {
        let response = self
            .client
            .delete(self.url(&format!("/library/{user_id}/{game_id}")))
            .send()
            .await?;
        let url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            return Err(LibraryError::Http {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item_json(id: i64, game: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "userId": 1,
            "juegoId": game,
            "name": "Kingdom of Ash",
            "price": 44.99,
            "dateAdded": "2024-03-01",
            "status": "owned"
        })
    }

    #[tokio::test]
    async fn fetch_library_unwraps_the_embedded_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": {
                    "libraryItemResponseList": [item_json(10, 7.into()), item_json(11, "custom_5".into())]
                }
            })))
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        let items = api.fetch_library(1).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 10);
        assert_eq!(items[1].game_id, GameRef::from("custom_5"));
    }

    #[tokio::test]
    async fn fetch_library_with_empty_envelope_list_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "_embedded": {} })),
            )
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        assert!(api.fetch_library(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_2xx_maps_to_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        match api.fetch_library(1).await {
            Err(LibraryError::Http { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_envelope_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        assert!(matches!(
            api.fetch_library(1).await,
            Err(LibraryError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn create_item_posts_wire_body_and_decodes_bare_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/library"))
            .and(body_json(serde_json::json!({"userId": 1, "juegoId": 7})))
            .respond_with(ResponseTemplate::new(201).set_body_json(item_json(10, 7.into())))
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        let item = api.create_item(1, &GameRef::Id(7)).await.unwrap();
        assert_eq!(item.id, 10);
    }

    #[tokio::test]
    async fn check_owned_reads_the_owns_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/library/1/7/owns"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"owns": true})),
            )
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        assert!(api.check_owned(1, &GameRef::Id(7)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_item_hits_the_composite_key_route() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/library/1/custom_5"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let api = LibraryApi::new(server.uri());
        api.delete_item(1, &GameRef::from("custom_5")).await.unwrap();
    }
}
