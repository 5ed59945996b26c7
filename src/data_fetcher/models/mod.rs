pub mod common;
pub mod matches;
pub mod persons;
pub mod scorers;
pub mod standings;
pub mod teams;

// Re-export all public types for convenience
pub use common::{Area, Competition, CompetitionsResponse, Season};
pub use matches::{Match, MatchTeam, MatchesResponse, Referee, ResultSet, Score, ScoreValues};
pub use persons::Person;
pub use scorers::{Scorer, ScorersResponse};
pub use standings::{StandingsResponse, StandingsTable, TableEntry};
pub use teams::TeamDetail;
