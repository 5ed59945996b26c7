use super::common::{Area, Competition};
use super::persons::Person;
use serde::{Deserialize, Serialize};

/// Model for the team detail response structure, squad included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDetail {
    pub id: i64,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(rename = "clubColors", default)]
    pub club_colors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub area: Option<Area>,
    #[serde(rename = "runningCompetitions", default)]
    pub running_competitions: Vec<Competition>,
    #[serde(default)]
    pub squad: Vec<Person>,
    #[serde(default)]
    pub coach: Option<Person>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_detail_from_provider_json() {
        let payload = r#"{
            "id": 57,
            "name": "Arsenal FC",
            "shortName": "Arsenal",
            "tla": "ARS",
            "founded": 1886,
            "clubColors": "Red / White",
            "venue": "Emirates Stadium",
            "runningCompetitions": [
                { "id": 2021, "name": "Premier League", "code": "PL" }
            ],
            "squad": [
                { "id": 44, "name": "Bukayo Saka", "position": "Right Winger" },
                { "id": 45, "name": "Declan Rice", "position": "Defensive Midfield" }
            ],
            "coach": { "id": 9, "name": "Mikel Arteta", "section": "Coaching Staff" }
        }"#;

        let team: TeamDetail = serde_json::from_str(payload).unwrap();
        assert_eq!(team.id, 57);
        assert_eq!(team.founded, Some(1886));
        assert_eq!(team.squad.len(), 2);
        assert_eq!(team.running_competitions[0].code, "PL");
        assert_eq!(team.coach.as_ref().unwrap().name, "Mikel Arteta");
    }

    #[test]
    fn test_team_without_squad() {
        let team: TeamDetail =
            serde_json::from_str(r#"{ "id": 57, "name": "Arsenal FC" }"#).unwrap();
        assert!(team.squad.is_empty());
        assert!(team.coach.is_none());
    }
}
