use super::common::{Competition, Season};
use super::matches::MatchTeam;
use super::persons::Person;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorer {
    pub player: Person,
    pub team: MatchTeam,
    #[serde(rename = "playedMatches", default)]
    pub played_matches: Option<i32>,
    #[serde(default)]
    pub goals: Option<i32>,
    #[serde(default)]
    pub assists: Option<i32>,
    #[serde(default)]
    pub penalties: Option<i32>,
}

/// Model for the top scorers response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorersResponse {
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub scorers: Vec<Scorer>,
}
