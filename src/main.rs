//! Entry point: parse CLI and dispatch to the fantasy client.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::debug;

use yahoo_fantasy::{
    cli::{Commands, YahooFantasy},
    AccessToken, BucketCache, Client, Consumer, League, LruStore, Player, Team,
    ACCESS_TOKEN_ENV_VAR, CLIENT_ID_ENV_VAR, CLIENT_SECRET_ENV_VAR, TOKEN_SECRET_ENV_VAR,
};

/// Entries the shared response store holds before evicting.
const STORE_CAPACITY: usize = 10_000;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = YahooFantasy::parse();
    let client = build_client(&app)?;

    match app.command {
        Commands::Leagues { year, json } => {
            let leagues = client.user_leagues(&year).await?;
            print_leagues(&leagues, json)?;
        }

        Commands::League {
            league_key,
            standings,
            json,
        } => {
            let league = if standings {
                client.league_standings(&league_key).await?
            } else {
                client.league_metadata(&league_key).await?
            };
            print_league(&league, json)?;
        }

        Commands::Team { team_key, json } => {
            let team = client.team(&team_key).await?;
            print_team(&team, json)?;
        }

        Commands::Roster {
            team_key,
            week,
            json,
        } => {
            let players = client.team_roster(&team_key, week).await?;
            print_players(&players, json)?;
        }

        Commands::Teams {
            league_key,
            week,
            json,
        } => {
            let teams = match week {
                Some(week) => client.all_team_stats(&league_key, week).await?,
                None => client.all_teams(&league_key).await?,
            };
            print_teams(&teams, json)?;
        }
    }

    debug!("completed with {} logical request(s)", client.request_count());
    Ok(())
}

fn build_client(app: &YahooFantasy) -> anyhow::Result<Client> {
    let credentials = &app.credentials;
    let client_id = resolve(
        credentials.client_id.clone(),
        "--client-id",
        CLIENT_ID_ENV_VAR,
    )?;
    let client_secret = resolve(
        credentials.client_secret.clone(),
        "--client-secret",
        CLIENT_SECRET_ENV_VAR,
    )?;
    let token_key = resolve(
        credentials.access_token.clone(),
        "--access-token",
        ACCESS_TOKEN_ENV_VAR,
    )?;
    let token_secret = resolve(
        credentials.token_secret.clone(),
        "--token-secret",
        TOKEN_SECRET_ENV_VAR,
    )?;

    let consumer = Consumer::new(client_id.clone(), client_secret)?;
    let token = AccessToken::new(token_key, token_secret);
    let store = Arc::new(LruStore::new(STORE_CAPACITY));
    let cache = BucketCache::new(client_id, Duration::from_secs(app.cache_seconds), store);

    Ok(Client::signed_with_cache(
        Arc::new(consumer),
        token,
        Arc::new(cache),
    ))
}

fn resolve(flag: Option<String>, flag_name: &str, env_var: &str) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }
    std::env::var(env_var).with_context(|| format!("pass {flag_name} or set {env_var}"))
}

fn league_row(league: &League) -> String {
    let state = if league.is_finished { "final" } else { "active" };
    format!(
        "{}  {}  weeks {}-{}  current {}  [{}]",
        league.league_key,
        league.name,
        league.start_week,
        league.end_week,
        league.current_week,
        state
    )
}

fn print_leagues(leagues: &[League], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(leagues)?);
        return Ok(());
    }
    for league in leagues {
        println!("{}", league_row(league));
    }
    Ok(())
}

fn print_league(league: &League, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(league)?);
        return Ok(());
    }
    println!("{}", league_row(league));
    for team in &league.teams.teams {
        println!(
            "  {}  {}  {:.2}",
            team.team_key, team.name, team.team_points.total
        );
    }
    Ok(())
}

fn print_team(team: &Team, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(team)?);
        return Ok(());
    }
    println!("{}  {}", team.team_key, team.name);
    for manager in &team.managers.managers {
        println!("  manager {}  {}", manager.manager_id, manager.nickname);
    }
    Ok(())
}

fn print_players(players: &[Player], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(players)?);
        return Ok(());
    }
    for player in players {
        println!("{}  {}", player.player_key, player.name.full);
    }
    Ok(())
}

fn print_teams(teams: &[Team], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(teams)?);
        return Ok(());
    }
    for team in teams {
        println!(
            "{}  {}  points {:.2}  projected {:.2}",
            team.team_key, team.name, team.team_points.total, team.team_projected_points.total
        );
    }
    Ok(())
}
