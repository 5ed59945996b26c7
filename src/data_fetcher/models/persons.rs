use super::matches::MatchTeam;
use serde::{Deserialize, Serialize};

/// A player, coach or official. Squad listings and scorer tables embed the
/// same shape with fewer fields populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(rename = "shirtNumber", default)]
    pub shirt_number: Option<i32>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<MatchTeam>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}
