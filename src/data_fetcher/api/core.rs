//! High-level fetch operations for the football data provider
//!
//! Each operation wraps one REST call as a governed work item and returns
//! typed data. Provider-level 404s are translated into domain lookups
//! failures here, so callers can tell "no such team" apart from transport
//! trouble.

use chrono::{Local, NaiveDate, Utc};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::data_fetcher::models::{
    CompetitionsResponse, Match, MatchesResponse, Person, ScorersResponse, StandingsResponse,
    TeamDetail,
};
use crate::error::AppError;

use super::fetch_utils::fetch;
use super::http_client::ApiClient;
use super::urls::{
    build_competitions_url, build_match_url, build_matches_url, build_person_url,
    build_scorers_url, build_standings_url, build_team_url,
};

/// Today's date in the local timezone, formatted as YYYY-MM-DD
pub fn today_local_date() -> String {
    Utc::now()
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

/// Parses a YYYY-MM-DD date argument
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    date.parse::<NaiveDate>()
        .map_err(|e| AppError::datetime_parse_error(format!("Invalid date '{date}': {e}")))
}

/// Lists matches in an inclusive date range, optionally narrowed to
/// competition codes.
///
/// # Arguments
/// * `client` - API client carrying the HTTP transport and the governor
/// * `config` - Application configuration (API domain)
/// * `date_from` - Start of the range in YYYY-MM-DD format
/// * `date_to` - End of the range in YYYY-MM-DD format
/// * `competitions` - Competition codes; empty means all visible competitions
/// * `token` - cancellation token for abandoning the request
pub async fn fetch_matches(
    client: &ApiClient,
    config: &Config,
    date_from: &str,
    date_to: &str,
    competitions: &[String],
    token: &CancellationToken,
) -> Result<MatchesResponse, AppError> {
    let from = parse_date(date_from)?;
    let to = parse_date(date_to)?;
    if to < from {
        return Err(AppError::datetime_parse_error(format!(
            "Date range ends before it starts: {date_from}..{date_to}"
        )));
    }

    let url = build_matches_url(&config.api_domain, date_from, date_to, competitions);
    fetch(client, &url, token).await
}

/// Fetches one match by id
pub async fn fetch_match(
    client: &ApiClient,
    config: &Config,
    match_id: i64,
    token: &CancellationToken,
) -> Result<Match, AppError> {
    let url = build_match_url(&config.api_domain, match_id);
    match fetch(client, &url, token).await {
        Err(AppError::ApiNotFound { .. }) => Err(AppError::match_not_found(match_id)),
        other => other,
    }
}

/// Fetches the standings tables for a competition code
pub async fn fetch_standings(
    client: &ApiClient,
    config: &Config,
    competition_code: &str,
    token: &CancellationToken,
) -> Result<StandingsResponse, AppError> {
    let url = build_standings_url(&config.api_domain, competition_code);
    match fetch(client, &url, token).await {
        Err(AppError::ApiNotFound { .. }) => {
            Err(AppError::competition_not_found(competition_code))
        }
        other => other,
    }
}

/// Fetches the top scorers for a competition code
pub async fn fetch_scorers(
    client: &ApiClient,
    config: &Config,
    competition_code: &str,
    limit: u32,
    token: &CancellationToken,
) -> Result<ScorersResponse, AppError> {
    let url = build_scorers_url(&config.api_domain, competition_code, limit);
    match fetch(client, &url, token).await {
        Err(AppError::ApiNotFound { .. }) => {
            Err(AppError::competition_not_found(competition_code))
        }
        other => other,
    }
}

/// Fetches one team by id, squad included
pub async fn fetch_team(
    client: &ApiClient,
    config: &Config,
    team_id: i64,
    token: &CancellationToken,
) -> Result<TeamDetail, AppError> {
    let url = build_team_url(&config.api_domain, team_id);
    match fetch(client, &url, token).await {
        Err(AppError::ApiNotFound { .. }) => Err(AppError::team_not_found(team_id)),
        other => other,
    }
}

/// Fetches one person by id
pub async fn fetch_person(
    client: &ApiClient,
    config: &Config,
    person_id: i64,
    token: &CancellationToken,
) -> Result<Person, AppError> {
    let url = build_person_url(&config.api_domain, person_id);
    match fetch(client, &url, token).await {
        Err(AppError::ApiNotFound { .. }) => Err(AppError::person_not_found(person_id)),
        other => other,
    }
}

/// Fetches the competitions visible to this API token
pub async fn fetch_competitions(
    client: &ApiClient,
    config: &Config,
    token: &CancellationToken,
) -> Result<CompetitionsResponse, AppError> {
    let url = build_competitions_url(&config.api_domain);
    fetch(client, &url, token).await
}

/// Lists matches for several competitions at once and merges them into one
/// chronological listing.
///
/// The per-competition fetches run concurrently; the governor serializes
/// and paces their network calls underneath, so this is safe to call with
/// any number of codes.
pub async fn fetch_matches_for_competitions(
    client: &ApiClient,
    config: &Config,
    date_from: &str,
    date_to: &str,
    competition_codes: &[String],
    token: &CancellationToken,
) -> Result<Vec<Match>, AppError> {
    let fetches = competition_codes.iter().map(|code| {
        let codes = std::slice::from_ref(code);
        async move { fetch_matches(client, config, date_from, date_to, codes, token).await }
    });

    let responses = futures::future::try_join_all(fetches).await?;
    let mut matches: Vec<Match> = responses
        .into_iter()
        .flat_map(|response| response.matches)
        .collect();
    matches.sort_by(|a, b| a.utc_date.cmp(&b.utc_date).then(a.id.cmp(&b.id)));
    Ok(matches)
}
