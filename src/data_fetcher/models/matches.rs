use super::common::{Competition, Season};
use serde::{Deserialize, Serialize};

/// One side's goal count in a score breakdown. Both fields are null for
/// stages of the game that never happened (e.g., extra time).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreValues {
    #[serde(default)]
    pub home: Option<i32>,
    #[serde(default)]
    pub away: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Score {
    /// "HOME_TEAM", "AWAY_TEAM" or "DRAW" once decided
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "fullTime", default)]
    pub full_time: ScoreValues,
    #[serde(rename = "halfTime", default)]
    pub half_time: ScoreValues,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
}

impl MatchTeam {
    /// Best display name available for the team
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.tla.as_deref())
            .unwrap_or("TBD")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referee {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    #[serde(rename = "utcDate")]
    pub utc_date: String,
    /// Provider status string ("TIMED", "IN_PLAY", "FINISHED", ...). Kept as
    /// text: the provider owns this vocabulary and extends it over time.
    pub status: String,
    #[serde(default)]
    pub minute: Option<i32>,
    #[serde(default)]
    pub matchday: Option<i32>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(rename = "homeTeam")]
    pub home_team: MatchTeam,
    #[serde(rename = "awayTeam")]
    pub away_team: MatchTeam,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub referees: Vec<Referee>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

impl Match {
    /// Whether the match is currently being played
    pub fn is_live(&self) -> bool {
        matches!(self.status.as_str(), "LIVE" | "IN_PLAY" | "PAUSED")
    }

    /// Whether the match has a final result
    pub fn is_finished(&self) -> bool {
        self.status == "FINISHED"
    }

    /// "2-1" style scoreline, or "-" when no goals have been recorded yet
    pub fn result_line(&self) -> String {
        match (self.score.full_time.home, self.score.full_time.away) {
            (Some(home), Some(away)) => format!("{home}-{away}"),
            _ => "-".to_string(),
        }
    }

    /// Whether one of the given team ids plays in this match
    pub fn involves_any_team(&self, team_ids: &[i64]) -> bool {
        let sides = [self.home_team.id, self.away_team.id];
        sides
            .into_iter()
            .flatten()
            .any(|id| team_ids.contains(&id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub count: i32,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub played: Option<i32>,
}

/// Model for the match listing response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(rename = "resultSet", default)]
    pub result_set: Option<ResultSet>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl MatchesResponse {
    /// Whether any match in the listing is currently being played. Listings
    /// with live matches are cached with a much shorter TTL.
    pub fn has_live_matches(&self) -> bool {
        self.matches.iter().any(Match::is_live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(status: &str) -> Match {
        Match {
            id: 327117,
            utc_date: "2026-08-08T14:00:00Z".to_string(),
            status: status.to_string(),
            minute: None,
            matchday: Some(1),
            stage: Some("REGULAR_SEASON".to_string()),
            group: None,
            competition: None,
            season: None,
            home_team: MatchTeam {
                id: Some(57),
                name: Some("Arsenal FC".to_string()),
                short_name: Some("Arsenal".to_string()),
                tla: Some("ARS".to_string()),
                crest: None,
            },
            away_team: MatchTeam {
                id: Some(61),
                name: Some("Chelsea FC".to_string()),
                short_name: Some("Chelsea".to_string()),
                tla: Some("CHE".to_string()),
                crest: None,
            },
            score: Score::default(),
            referees: vec![],
            last_updated: None,
        }
    }

    #[test]
    fn test_live_status_detection() {
        assert!(sample_match("IN_PLAY").is_live());
        assert!(sample_match("PAUSED").is_live());
        assert!(sample_match("LIVE").is_live());
        assert!(!sample_match("TIMED").is_live());
        assert!(!sample_match("FINISHED").is_live());
        assert!(sample_match("FINISHED").is_finished());
    }

    #[test]
    fn test_result_line() {
        let mut m = sample_match("FINISHED");
        assert_eq!(m.result_line(), "-");
        m.score.full_time = ScoreValues {
            home: Some(2),
            away: Some(1),
        };
        assert_eq!(m.result_line(), "2-1");
    }

    #[test]
    fn test_involves_any_team() {
        let m = sample_match("TIMED");
        assert!(m.involves_any_team(&[57]));
        assert!(m.involves_any_team(&[9999, 61]));
        assert!(!m.involves_any_team(&[9999]));
        assert!(!m.involves_any_team(&[]));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut team = MatchTeam {
            id: Some(57),
            name: Some("Arsenal FC".to_string()),
            short_name: Some("Arsenal".to_string()),
            tla: Some("ARS".to_string()),
            crest: None,
        };
        assert_eq!(team.display_name(), "Arsenal");
        team.short_name = None;
        assert_eq!(team.display_name(), "Arsenal FC");
        team.name = None;
        assert_eq!(team.display_name(), "ARS");
        team.tla = None;
        assert_eq!(team.display_name(), "TBD");
    }

    #[test]
    fn test_matches_response_from_provider_json() {
        let payload = r#"{
            "resultSet": { "count": 1, "first": "2026-08-08", "last": "2026-08-08", "played": 0 },
            "matches": [{
                "id": 327117,
                "utcDate": "2026-08-08T14:00:00Z",
                "status": "IN_PLAY",
                "minute": 37,
                "matchday": 1,
                "homeTeam": { "id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS" },
                "awayTeam": { "id": 61, "name": "Chelsea FC", "shortName": "Chelsea", "tla": "CHE" },
                "score": {
                    "winner": null,
                    "duration": "REGULAR",
                    "fullTime": { "home": 1, "away": 0 },
                    "halfTime": { "home": 1, "away": 0 }
                }
            }]
        }"#;

        let response: MatchesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.matches.len(), 1);
        assert!(response.has_live_matches());
        let m = &response.matches[0];
        assert_eq!(m.minute, Some(37));
        assert_eq!(m.result_line(), "1-0");
        assert_eq!(m.home_team.display_name(), "Arsenal");
    }

    #[test]
    fn test_empty_listing_has_no_live_matches() {
        let response: MatchesResponse = serde_json::from_str(r#"{ "matches": [] }"#).unwrap();
        assert!(!response.has_live_matches());
        assert!(response.result_set.is_none());
    }
}
