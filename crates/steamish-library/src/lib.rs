//! Per-user game library for Steamish.
//!
//! The remote library service is the source of truth; the local store holds
//! a per-user copy that serves reads when the service is unreachable.
//! Library reads never fail: a single failed remote call falls back to the
//! local copy immediately, with no retry. Writes go to the remote service
//! and surface their errors to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use steamish_library::{LibraryApi, LibraryRepository};
//! use steamish_store::Store;
//!
//! let repo = LibraryRepository::new(
//!     LibraryApi::new("https://api.steamish.example"),
//!     Store::in_memory(),
//! );
//! let items = repo.get_library(1).await; // never errors
//! ```

mod error;
mod item;
mod remote;
mod repository;

pub use error::LibraryError;
pub use item::{GameRef, LibraryItem};
pub use remote::LibraryApi;
pub use repository::{LibraryLoad, LibraryRepository, LibrarySource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        GameRef, LibraryApi, LibraryError, LibraryItem, LibraryLoad, LibraryRepository,
        LibrarySource,
    };
}
