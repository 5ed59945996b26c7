pub mod api;
pub mod cache;
pub mod models;

pub use api::{
    ApiClient, fetch_competitions, fetch_match, fetch_matches, fetch_matches_for_competitions,
    fetch_person, fetch_scorers, fetch_standings, fetch_team, today_local_date,
};
pub use models::{Match, MatchesResponse, Person, ScorersResponse, StandingsResponse, TeamDetail};
