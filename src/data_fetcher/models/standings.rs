use super::common::{Competition, Season};
use super::matches::MatchTeam;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub position: i32,
    pub team: MatchTeam,
    #[serde(rename = "playedGames")]
    pub played_games: i32,
    #[serde(default)]
    pub form: Option<String>,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    #[serde(rename = "goalsFor")]
    pub goals_for: i32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: i32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
}

/// One table within a standings response. League formats ship several
/// (TOTAL/HOME/AWAY, or one per group in cup competitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable {
    pub stage: String,
    #[serde(rename = "type")]
    pub table_type: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub table: Vec<TableEntry>,
}

/// Model for the standings response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub standings: Vec<StandingsTable>,
}

impl StandingsResponse {
    /// The overall table, ignoring home/away splits
    pub fn total_table(&self) -> Option<&StandingsTable> {
        self.standings.iter().find(|t| t.table_type == "TOTAL")
    }
}
