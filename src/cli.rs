//! CLI argument definitions and parsing structures.

use clap::{Args, Parser, Subcommand};

use crate::content::Week;

/// OAuth credential arguments shared by every command.
#[derive(Debug, Args)]
pub struct Credentials {
    /// OAuth client ID (or set `YAHOO_CLIENT_ID` env var).
    #[clap(long)]
    pub client_id: Option<String>,

    /// OAuth client secret (or set `YAHOO_CLIENT_SECRET` env var).
    #[clap(long)]
    pub client_secret: Option<String>,

    /// Pre-obtained access token key (or set `YAHOO_ACCESS_TOKEN` env var).
    #[clap(long)]
    pub access_token: Option<String>,

    /// Access token secret (or set `YAHOO_TOKEN_SECRET` env var).
    #[clap(long)]
    pub token_secret: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-fantasy", about = "Yahoo Fantasy Sports CLI")]
pub struct YahooFantasy {
    #[clap(flatten)]
    pub credentials: Credentials,

    /// Freshness window for the response cache, in seconds.
    #[clap(long, default_value_t = 3600)]
    pub cache_seconds: u64,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the signed-in user's leagues for a season.
    Leagues {
        /// Season year (e.g. 2013), or `nfl` for the current season.
        #[clap(long, short, default_value = "nfl")]
        year: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch metadata or standings for one league.
    League {
        /// League key, e.g. `223.l.431`.
        #[clap(long, short = 'k')]
        league_key: String,

        /// Fetch standings instead of bare metadata.
        #[clap(long)]
        standings: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fetch metadata for one team.
    Team {
        /// Team key, e.g. `223.l.431.t.1`.
        #[clap(long, short = 'k')]
        team_key: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List a team's roster for a week.
    Roster {
        /// Team key, e.g. `223.l.431.t.1`.
        #[clap(long, short = 'k')]
        team_key: String,

        /// Single week.
        #[clap(long, short)]
        week: Week,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the teams of a league, optionally with week stats.
    Teams {
        /// League key, e.g. `223.l.431`.
        #[clap(long, short = 'k')]
        league_key: String,

        /// Fetch stats for this week instead of bare metadata.
        #[clap(long, short)]
        week: Option<Week>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
