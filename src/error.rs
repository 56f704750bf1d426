//! Error types for the Yahoo Fantasy Sports client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FantasyError>;

/// Boxed error surfaced by a request signer; implementations report
/// failures from whatever stack they wrap.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum FantasyError {
    /// Sentinel for permission failures; carries no response.
    #[error("user is not allowed to access the requested resource")]
    AccessDenied,

    #[error("signed request failed: {0}")]
    Signer(BoxError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to decode response XML: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("no users returned for the signed-in session")]
    NoUsers,

    #[error("no team found for key: {key}")]
    TeamNotFound { key: String },

    #[error("no league found for key: {key}")]
    LeagueNotFound { key: String },

    #[error("no fantasy data available for year: {year}")]
    UnsupportedYear { year: String },

    #[error("failed to parse week: {0}")]
    InvalidWeek(#[from] std::num::ParseIntError),
}

impl From<BoxError> for FantasyError {
    fn from(err: BoxError) -> Self {
        FantasyError::Signer(err)
    }
}
