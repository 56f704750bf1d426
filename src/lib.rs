//! Yahoo Fantasy Sports Client Library
//!
//! A Rust client for the Yahoo Fantasy Sports API, retrieving league, team,
//! player and roster content over signed HTTP with optional time-bucketed
//! caching.
//!
//! ## Features
//!
//! - **Signed Transport**: OAuth-signed GET requests with bounded retry of
//!   Yahoo's transient credential rejections
//! - **Time-Bucketed Caching**: Decoded responses cached per client, URL and
//!   freshness window over a shared LRU store
//! - **Composable Sources**: Cache and decoder layered as content-source
//!   decorators, so any layer can be swapped or mocked
//! - **Typed Content**: XML responses decoded into a typed content tree with
//!   permissive defaults
//! - **Season Mapping**: Year-to-game-key lookup owned by the client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use yahoo_fantasy::{AccessToken, Client, Consumer};
//!
//! # async fn example() -> yahoo_fantasy::Result<()> {
//! let consumer = Consumer::new("client-id", "client-secret")?;
//! let token = AccessToken::new("token-key", "token-secret");
//! let client = Client::signed(Arc::new(consumer), token);
//!
//! for league in client.user_leagues("2013").await? {
//!     println!("{}: {}", league.league_key, league.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI reads credentials from the environment when flags are omitted:
//! ```bash
//! export YAHOO_CLIENT_ID=...
//! export YAHOO_CLIENT_SECRET=...
//! export YAHOO_ACCESS_TOKEN=...
//! export YAHOO_TOKEN_SECRET=...
//! ```

pub mod cache;
pub mod cli;
pub mod client;
pub mod content;
pub mod error;
pub mod provider;
pub mod signer;
pub mod transport;

// Re-export commonly used types
pub use cache::{BucketCache, ContentCache, LruStore, StoreValue};
pub use client::{Client, NFL_GAME_KEY, YAHOO_BASE_URL};
pub use content::{
    FantasyContent, League, Manager, Name, Player, Points, Roster, Team, TeamLogo, Week,
};
pub use error::{BoxError, FantasyError, Result};
pub use provider::{CachedSource, ContentSource, XmlSource};
pub use signer::{AccessToken, Consumer, RequestSigner};
pub use transport::SignedTransport;

pub const CLIENT_ID_ENV_VAR: &str = "YAHOO_CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "YAHOO_CLIENT_SECRET";
pub const ACCESS_TOKEN_ENV_VAR: &str = "YAHOO_ACCESS_TOKEN";
pub const TOKEN_SECRET_ENV_VAR: &str = "YAHOO_TOKEN_SECRET";
