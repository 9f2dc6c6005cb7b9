//! # Biblia - local Bible reader
//!
//! A command-line Bible reader over a bundled, read-only SQLite dataset.
//!
//! ## Features
//!
//! - **Navigation**: Book/chapter reading with paging across book boundaries
//! - **Prefetching**: Adjacent chapters are loaded in the background for instant paging
//! - **Search**: Case-insensitive substring search over verse text
//! - **Reading History**: The last 100 chapters read, with streaks and statistics
//! - **Saved Items**: Favorites with tags, notes and reading plans
//!
//! ## Usage
//!
//! ```rust,no_run
//! use biblia::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
