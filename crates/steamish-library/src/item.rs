//! Library item types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A game reference as the library service carries it.
///
/// The service is not consistent here: built-in games come back with numeric
/// ids, custom games with string ids. Comparison normalizes both to their
/// string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameRef {
    Id(i64),
    Key(String),
}

impl GameRef {
    /// Compare two references by their normalized string form.
    pub fn matches(&self, other: &GameRef) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for GameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameRef::Id(id) => write!(f, "{id}"),
            GameRef::Key(key) => write!(f, "{key}"),
        }
    }
}

impl PartialEq for GameRef {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl From<i64> for GameRef {
    fn from(id: i64) -> Self {
        GameRef::Id(id)
    }
}

impl From<&str> for GameRef {
    fn from(key: &str) -> Self {
        GameRef::Key(key.to_string())
    }
}

impl From<String> for GameRef {
    fn from(key: String) -> Self {
        GameRef::Key(key)
    }
}

/// One ownership record linking a user to a game.
///
/// Field names follow the service's wire format, including the legacy
/// `juegoId` key for the game reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "juegoId")]
    pub game_id: GameRef,
    pub name: String,
    pub price: f64,
    pub date_added: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl LibraryItem {
    /// Build a locally-created record, stamped with today's date.
    pub fn local(
        id: i64,
        user_id: i64,
        game_id: impl Into<GameRef>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            user_id,
            game_id: game_id.into(),
            name: name.into(),
            price,
            date_added: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            status: "owned".to_string(),
            genre: None,
        }
    }
}
