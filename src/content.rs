//! Typed model of Yahoo Fantasy Sports content.
//!
//! Every API response decodes into a single [`FantasyContent`] tree; which
//! branch is populated depends on the resource that was requested. Missing
//! elements decode to their default values, so an empty collection is a
//! valid result and distinct from a decode failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FantasyError, Result};

/// Type-safe wrapper for fantasy week numbers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Root element of every decoded response.
///
/// Exactly one branch is populated per response, determined by the
/// resource that was requested.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FantasyContent {
    /// Signed-in user hierarchy (`/users;use_login=1/...` resources).
    #[serde(default)]
    pub users: UserList,
    /// Single league (`/league/...` resources).
    pub league: Option<League>,
    /// Single team (`/team/...` resources).
    pub team: Option<Team>,
    /// Flat player collection (`/players...` resources).
    #[serde(default)]
    pub players: PlayerList,
}

/// `<users>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserList {
    #[serde(rename = "user", default)]
    pub users: Vec<User>,
}

/// A signed-in user and the fantasy games visible to them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub games: GameList,
}

/// `<games>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameList {
    #[serde(rename = "game", default)]
    pub games: Vec<Game>,
}

/// One fantasy game (a sport in a given season).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Game {
    #[serde(default)]
    pub game_key: String,
    #[serde(default)]
    pub leagues: LeagueList,
}

/// `<leagues>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueList {
    #[serde(rename = "league", default)]
    pub leagues: Vec<League>,
}

/// A fantasy league within a game.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub league_key: String,
    #[serde(default)]
    pub league_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_week: Week,
    #[serde(default)]
    pub start_week: Week,
    #[serde(default)]
    pub end_week: Week,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub teams: TeamList,
    #[serde(default)]
    pub players: PlayerList,
}

/// `<teams>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamList {
    #[serde(rename = "team", default)]
    pub teams: Vec<Team>,
}

/// A team within a league.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub team_key: String,
    #[serde(default)]
    pub team_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub managers: ManagerList,
    #[serde(default)]
    pub team_points: Points,
    #[serde(default)]
    pub team_projected_points: Points,
    #[serde(default)]
    pub team_logos: LogoList,
    #[serde(default)]
    pub roster: Roster,
}

/// `<managers>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ManagerList {
    #[serde(rename = "manager", default)]
    pub managers: Vec<Manager>,
}

/// A human managing a team.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manager {
    #[serde(default)]
    pub manager_id: u64,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub guid: String,
}

/// Points scored or projected over some coverage span.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Points {
    #[serde(default)]
    pub coverage_type: String,
    #[serde(default)]
    pub week: Week,
    #[serde(default)]
    pub total: f64,
}

/// `<team_logos>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogoList {
    #[serde(rename = "team_logo", default)]
    pub logos: Vec<TeamLogo>,
}

/// A team avatar at a particular size.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamLogo {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub url: String,
}

/// A team's roster for some week.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub players: PlayerList,
}

/// `<players>` collection wrapper.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerList {
    #[serde(rename = "player", default)]
    pub players: Vec<Player>,
}

/// A rosterable player.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub player_key: String,
    #[serde(default)]
    pub player_id: u64,
    #[serde(default)]
    pub name: Name,
}

/// A player's name forms as reported by the API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Name {
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}
