//! High-level client for the Yahoo Fantasy Sports API.
//!
//! [`Client`] builds resource URLs, runs every logical fetch through the
//! provider chain exactly once, and projects decoded content into the
//! domain records callers ask for. Construction decides the chain: a bare
//! decoder over the signed transport, or the same with a cache in front.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::cache::ContentCache;
use crate::content::{FantasyContent, League, Player, Team, Week};
use crate::error::{FantasyError, Result};
use crate::provider::{CachedSource, ContentSource, XmlSource};
use crate::signer::{AccessToken, RequestSigner};
use crate::transport::SignedTransport;

/// Base URL for all fantasy resources.
pub const YAHOO_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// Game key selecting the current NFL season.
pub const NFL_GAME_KEY: &str = "nfl";

/// Yahoo game keys for NFL seasons, by year.
const GAME_KEYS: &[(&str, &str)] = &[
    ("nfl", NFL_GAME_KEY),
    ("2015", "348"),
    ("2014", "331"),
    ("2013", "314"),
    ("2012", "273"),
    ("2011", "257"),
    ("2010", "242"),
    ("2009", "222"),
    ("2008", "199"),
    ("2007", "175"),
    ("2006", "153"),
    ("2005", "124"),
    ("2004", "101"),
    ("2003", "79"),
    ("2002", "49"),
    ("2001", "57"),
];

/// Façade over a [`ContentSource`] chain.
pub struct Client {
    provider: Arc<dyn ContentSource>,
    game_keys: HashMap<&'static str, &'static str>,
    request_count: AtomicU64,
}

impl Client {
    /// Client over an arbitrary content source.
    pub fn new(provider: Arc<dyn ContentSource>) -> Self {
        Self {
            provider,
            game_keys: GAME_KEYS.iter().copied().collect(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Client that signs requests with `token` and decodes XML responses.
    pub fn signed(signer: Arc<dyn RequestSigner>, token: AccessToken) -> Self {
        Self::new(Arc::new(XmlSource::new(SignedTransport::new(signer, token))))
    }

    /// Like [`Client::signed`], with `cache` consulted before the decoder.
    pub fn signed_with_cache(
        signer: Arc<dyn RequestSigner>,
        token: AccessToken,
        cache: Arc<dyn ContentCache>,
    ) -> Self {
        let decoder = Arc::new(XmlSource::new(SignedTransport::new(signer, token)));
        Self::new(Arc::new(CachedSource::new(decoder, cache)))
    }

    /// Logical fetches made through this client, cache hits included.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Fetch and decode the resource at `url` through the provider chain.
    pub async fn fantasy_content(&self, url: &str) -> Result<Arc<FantasyContent>> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.provider.fetch(url).await
    }

    fn game_key(&self, year: &str) -> Result<&'static str> {
        self.game_keys
            .get(year)
            .copied()
            .ok_or_else(|| FantasyError::UnsupportedYear {
                year: year.to_string(),
            })
    }

    /// Leagues the signed-in user belonged to in `year`.
    ///
    /// An unsupported year fails before any fetch. A response naming no
    /// user at all is an error; a user with no games or no leagues for
    /// the year yields an empty list.
    pub async fn user_leagues(&self, year: &str) -> Result<Vec<League>> {
        let key = self.game_key(year)?;
        let url = format!("{YAHOO_BASE_URL}/users;use_login=1/games;game_keys={key}/leagues");
        let content = self.fantasy_content(&url).await?;

        let user = content.users.users.first().ok_or(FantasyError::NoUsers)?;
        Ok(user
            .games
            .games
            .first()
            .map(|game| game.leagues.leagues.clone())
            .unwrap_or_default())
    }

    /// Metadata for the team at `team_key`.
    pub async fn team(&self, team_key: &str) -> Result<Team> {
        let url = format!("{YAHOO_BASE_URL}/team/{team_key}/metadata");
        let content = self.fantasy_content(&url).await?;

        content.team.clone().ok_or_else(|| FantasyError::TeamNotFound {
            key: team_key.to_string(),
        })
    }

    /// Metadata for the league at `league_key`.
    pub async fn league_metadata(&self, league_key: &str) -> Result<League> {
        self.league_resource(league_key, "metadata").await
    }

    /// Standings for the league at `league_key`.
    pub async fn league_standings(&self, league_key: &str) -> Result<League> {
        self.league_resource(league_key, "standings").await
    }

    async fn league_resource(&self, league_key: &str, resource: &str) -> Result<League> {
        let url = format!("{YAHOO_BASE_URL}/league/{league_key}/{resource}");
        let content = self.fantasy_content(&url).await?;

        content
            .league
            .clone()
            .ok_or_else(|| FantasyError::LeagueNotFound {
                key: league_key.to_string(),
            })
    }

    /// Stats for the given players in `week`.
    ///
    /// Players are identified by their player keys; an absent league
    /// branch yields an empty list.
    pub async fn players_stats(
        &self,
        league_key: &str,
        week: Week,
        players: &[Player],
    ) -> Result<Vec<Player>> {
        let keys = players
            .iter()
            .map(|player| player.player_key.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{YAHOO_BASE_URL}/league/{league_key}/players;player_keys={keys}/stats;type=week;week={week}"
        );
        let content = self.fantasy_content(&url).await?;

        Ok(content
            .league
            .as_ref()
            .map(|league| league.players.players.clone())
            .unwrap_or_default())
    }

    /// Roster of the team at `team_key` for `week`.
    pub async fn team_roster(&self, team_key: &str, week: Week) -> Result<Vec<Player>> {
        let url = format!("{YAHOO_BASE_URL}/team/{team_key}/roster;week={week}");
        let content = self.fantasy_content(&url).await?;

        Ok(content
            .team
            .as_ref()
            .map(|team| team.roster.players.players.clone())
            .unwrap_or_default())
    }

    /// Week stats for every team in the league at `league_key`.
    pub async fn all_team_stats(&self, league_key: &str, week: Week) -> Result<Vec<Team>> {
        let url =
            format!("{YAHOO_BASE_URL}/league/{league_key}/teams/stats;type=week;week={week}");
        self.league_teams(&url).await
    }

    /// Every team in the league at `league_key`.
    pub async fn all_teams(&self, league_key: &str) -> Result<Vec<Team>> {
        let url = format!("{YAHOO_BASE_URL}/league/{league_key}/teams");
        self.league_teams(&url).await
    }

    async fn league_teams(&self, url: &str) -> Result<Vec<Team>> {
        let content = self.fantasy_content(url).await?;

        Ok(content
            .league
            .as_ref()
            .map(|league| league.teams.teams.clone())
            .unwrap_or_default())
    }
}
