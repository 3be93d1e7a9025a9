//! Premier Zone Player Client Library
//!
//! A Rust client for a Premier League player statistics backend, together
//! with the search flow a player catalog view is built on.
//!
//! ## Features
//!
//! - **API Client**: search, list, create, update and delete players over REST
//! - **Stable Queries**: only non-blank filters are sent, always in
//!   `name, team, position, nation` order
//! - **Search Controller**: filter editing plus an `Idle → Loading → Success | Error`
//!   fetch lifecycle where only the newest request may update the view
//! - **Text Rendering**: loading, empty, error and card-grid views for the terminal
//! - **Offline Demo**: a built-in roster for previews without a backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use premier_zone::{ApiClient, ClientConfig, FilterField, SearchController};
//!
//! # async fn example() -> premier_zone::Result<()> {
//! let client = ApiClient::new(ClientConfig::default())?;
//! let mut view = SearchController::new(client);
//!
//! view.mount().await;
//! view.set_field(FilterField::Position, "Forward");
//! view.search().await;
//! println!("{:?} players", view.result_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a backend other than `http://localhost:8080/api/player`:
//! ```bash
//! export PREMIER_ZONE_BASE_URL=http://stats.internal:8080/api/player
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod demo;
pub mod error;
pub mod render;
pub mod search;

// Re-export commonly used types
pub use api::{ApiClient, ClientConfig, PlayerRecord, ResponsePolicy};
pub use crate::core::{FilterCriteria, FilterField};
pub use error::{ApiError, Result};
pub use search::{FetchState, PlayerSource, SearchController};
