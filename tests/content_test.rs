//! Unit tests for the decoded content model against realistic response documents

use yahoo_fantasy::content::*;

const TEAM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fantasy_content xmlns:yahoo="http://www.yahooapis.com/v1/base.rng" xmlns="http://fantasysports.yahooapis.com/fantasy/v2/base.rng" xml:lang="en-US" yahoo:uri="http://fantasysports.yahooapis.com/fantasy/v2/team/223.l.431.t.1" time="426.26690864563ms" copyright="Data provided by Yahoo! and STATS, LLC">
  <team>
    <team_key>223.l.431.t.1</team_key>
    <team_id>1</team_id>
    <name>Team Name</name>
    <url>http://football.fantasysports.yahoo.com/archive/pnfl/2009/431/1</url>
    <team_logos>
      <team_logo>
        <size>medium</size>
        <url>http://example.com/logo.png</url>
      </team_logo>
    </team_logos>
    <division_id>2</division_id>
    <faab_balance>22</faab_balance>
    <managers>
      <manager>
        <manager_id>13</manager_id>
        <nickname>Nickname</nickname>
        <guid>1234567890</guid>
      </manager>
    </managers>
    <team_points>
      <coverage_type>week</coverage_type>
      <week>16</week>
      <total>123.450000</total>
    </team_points>
    <team_projected_points>
      <coverage_type>week</coverage_type>
      <week>16</week>
      <total>543.210000</total>
    </team_projected_points>
  </team>
</fantasy_content>"#;

const LEAGUE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fantasy_content xml:lang="en-US" yahoo:uri="http://fantasysports.yahooapis.com/fantasy/v2/league/223.l.431" xmlns:yahoo="http://www.yahooapis.com/v1/base.rng" time="181.80584907532ms" copyright="Data provided by Yahoo! and STATS, LLC" xmlns="http://fantasysports.yahooapis.com/fantasy/v2/base.rng">
  <league>
    <league_key>223.l.431</league_key>
    <league_id>341</league_id>
    <name>League Name</name>
    <url>http://football.fantasysports.yahoo.com/archive/pnfl/2009/431</url>
    <draft_status>postdraft</draft_status>
    <num_teams>14</num_teams>
    <edit_key>17</edit_key>
    <weekly_deadline/>
    <league_update_timestamp>1262595518</league_update_timestamp>
    <scoring_type>head</scoring_type>
    <current_week>16</current_week>
    <start_week>1</start_week>
    <end_week>16</end_week>
    <is_finished>true</is_finished>
  </league>
</fantasy_content>"#;

const USER_GAMES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fantasy_content xmlns:yahoo="http://www.yahooapis.com/v1/base.rng" xmlns="http://fantasysports.yahooapis.com/fantasy/v2/base.rng" xml:lang="en-US">
  <users count="1">
    <user>
      <guid>USER_GUID</guid>
      <games count="1">
        <game>
          <game_key>314</game_key>
          <game_id>314</game_id>
          <name>Football</name>
          <code>nfl</code>
          <season>2013</season>
          <leagues count="2">
            <league>
              <league_key>314.l.25443</league_key>
              <name>First League</name>
            </league>
            <league>
              <league_key>314.l.98765</league_key>
              <name>Second League</name>
            </league>
          </leagues>
        </game>
      </games>
    </user>
  </users>
</fantasy_content>"#;

const ROSTER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fantasy_content xmlns="http://fantasysports.yahooapis.com/fantasy/v2/base.rng" xml:lang="en-US">
  <team>
    <team_key>223.l.431.t.1</team_key>
    <roster>
      <coverage_type>week</coverage_type>
      <week>2</week>
      <players count="2">
        <player>
          <player_key>223.p.5479</player_key>
          <player_id>5479</player_id>
          <name>
            <full>Drew Brees</full>
            <first>Drew</first>
            <last>Brees</last>
          </name>
        </player>
        <player>
          <player_key>223.p.1025</player_key>
          <player_id>1025</player_id>
          <name>
            <full>Adrian Peterson</full>
            <first>Adrian</first>
            <last>Peterson</last>
          </name>
        </player>
      </players>
    </roster>
  </team>
</fantasy_content>"#;

fn decode(xml: &str) -> FantasyContent {
    quick_xml::de::from_str(xml).unwrap()
}

#[cfg(test)]
mod content_tests {
    use super::*;

    #[test]
    fn test_team_document_decodes() {
        let content = decode(TEAM_XML);

        let team = content.team.as_ref().unwrap();
        assert_eq!(team.team_key, "223.l.431.t.1");
        assert_eq!(team.team_id, 1);
        assert_eq!(team.name, "Team Name");

        assert_eq!(team.managers.managers.len(), 1);
        let manager = &team.managers.managers[0];
        assert_eq!(manager.manager_id, 13);
        assert_eq!(manager.nickname, "Nickname");
        assert_eq!(manager.guid, "1234567890");

        assert_eq!(team.team_points.coverage_type, "week");
        assert_eq!(team.team_points.week, Week::new(16));
        assert_eq!(team.team_points.total, 123.45);
        assert_eq!(team.team_projected_points.total, 543.21);

        assert_eq!(team.team_logos.logos.len(), 1);
        assert_eq!(team.team_logos.logos[0].size, "medium");
        assert_eq!(team.team_logos.logos[0].url, "http://example.com/logo.png");
    }

    #[test]
    fn test_team_document_leaves_other_branches_empty() {
        let content = decode(TEAM_XML);

        assert!(content.users.users.is_empty());
        assert!(content.league.is_none());
        assert!(content.players.players.is_empty());
    }

    #[test]
    fn test_league_document_decodes() {
        let content = decode(LEAGUE_XML);

        let league = content.league.as_ref().unwrap();
        assert_eq!(league.league_key, "223.l.431");
        assert_eq!(league.league_id, 341);
        assert_eq!(league.name, "League Name");
        assert_eq!(league.current_week, Week::new(16));
        assert_eq!(league.start_week, Week::new(1));
        assert_eq!(league.end_week, Week::new(16));
        assert!(league.is_finished);
    }

    #[test]
    fn test_numeric_boolean_flags_decode() {
        let xml = r#"<fantasy_content><league><is_finished>1</is_finished></league></fantasy_content>"#;
        let content: FantasyContent = quick_xml::de::from_str(xml).unwrap();

        assert!(content.league.unwrap().is_finished);
    }

    #[test]
    fn test_signed_in_user_hierarchy_decodes() {
        let content = decode(USER_GAMES_XML);

        assert_eq!(content.users.users.len(), 1);
        let games = &content.users.users[0].games.games;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].game_key, "314");

        let leagues = &games[0].leagues.leagues;
        assert_eq!(leagues.len(), 2);
        assert_eq!(leagues[0].league_key, "314.l.25443");
        assert_eq!(leagues[0].name, "First League");
        assert_eq!(leagues[1].league_key, "314.l.98765");
    }

    #[test]
    fn test_user_without_games_decodes_to_empty_collection() {
        let xml = r#"<fantasy_content><users><user><games/></user></users></fantasy_content>"#;
        let content: FantasyContent = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(content.users.users.len(), 1);
        assert!(content.users.users[0].games.games.is_empty());
    }

    #[test]
    fn test_roster_document_decodes() {
        let content = decode(ROSTER_XML);

        let players = &content.team.as_ref().unwrap().roster.players.players;
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].player_key, "223.p.5479");
        assert_eq!(players[0].player_id, 5479);
        assert_eq!(players[0].name.full, "Drew Brees");
        assert_eq!(players[0].name.first, "Drew");
        assert_eq!(players[0].name.last, "Brees");
        assert_eq!(players[1].name.full, "Adrian Peterson");
    }

    #[test]
    fn test_league_players_document_decodes() {
        let xml = r#"<fantasy_content>
  <league>
    <league_key>223.l.431</league_key>
    <players count="1">
      <player>
        <player_key>223.p.5479</player_key>
        <player_id>5479</player_id>
        <name><full>Drew Brees</full></name>
      </player>
    </players>
  </league>
</fantasy_content>"#;
        let content: FantasyContent = quick_xml::de::from_str(xml).unwrap();

        let league = content.league.as_ref().unwrap();
        assert_eq!(league.players.players.len(), 1);
        assert_eq!(league.players.players[0].name.full, "Drew Brees");
    }

    #[test]
    fn test_missing_elements_fall_back_to_defaults() {
        let xml = r#"<fantasy_content><league><league_key>223.l.431</league_key></league></fantasy_content>"#;
        let content: FantasyContent = quick_xml::de::from_str(xml).unwrap();

        let league = content.league.unwrap();
        assert_eq!(league.league_key, "223.l.431");
        assert_eq!(league.league_id, 0);
        assert_eq!(league.name, "");
        assert_eq!(league.current_week, Week::new(0));
        assert!(!league.is_finished);
        assert!(league.teams.teams.is_empty());
    }

    #[test]
    fn test_league_serializes_to_flat_json() {
        let content = decode(LEAGUE_XML);
        let league = content.league.unwrap();

        let json = serde_json::to_value(&league).unwrap();

        assert_eq!(json["league_key"], "223.l.431");
        assert_eq!(json["name"], "League Name");
        // Week serializes as its bare number.
        assert_eq!(json["current_week"], 16);
        assert_eq!(json["is_finished"], true);
    }
}
