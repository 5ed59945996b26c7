use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(rename = "type", default)]
    pub competition_type: Option<String>,
    #[serde(default)]
    pub emblem: Option<String>,
    #[serde(default)]
    pub area: Option<Area>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "currentMatchday", default)]
    pub current_matchday: Option<i32>,
}

/// Model for the competition listing response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionsResponse {
    #[serde(default)]
    pub count: Option<i32>,
    pub competitions: Vec<Competition>,
}
