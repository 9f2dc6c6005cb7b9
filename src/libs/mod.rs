//! Core library modules of the reader.
//!
//! - **Model**: `bible` value types shared by every layer
//! - **Reading flow**: `navigation`, `prefetch`, `reader`
//! - **User data**: `history`, `stats`, `favorites`, `notes`, `plans` on top of `kv`
//! - **Infrastructure**: `config`, `data_storage`, `messages`
//! - **Presentation**: `formatter`, `view`, `search`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use biblia::libs::favorites::{Favorites, FavoriteVerse};
//! use biblia::libs::kv::FileStore;
//!
//! let mut favorites = Favorites::new(FileStore::shared("data"))?;
//! favorites.add(FavoriteVerse::new("Juan", 3, 16, "Porque de tal manera amó Dios al mundo..."))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bible;
pub mod config;
pub mod data_storage;
pub mod favorites;
pub mod formatter;
pub mod history;
pub mod kv;
pub mod messages;
pub mod navigation;
pub mod notes;
pub mod plans;
pub mod prefetch;
pub mod reader;
pub mod search;
pub mod stats;
pub mod view;
