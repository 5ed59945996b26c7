//! URL building utilities for API endpoints

/// Builds a match listing URL for a date range, optionally narrowed to
/// specific competitions.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `date_from` - Start of the range in YYYY-MM-DD format (inclusive)
/// * `date_to` - End of the range in YYYY-MM-DD format (inclusive)
/// * `competitions` - Competition codes; empty means all visible competitions
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_matches_url;
///
/// let url = build_matches_url(
///     "https://api.example.com",
///     "2026-08-08",
///     "2026-08-09",
///     &["PL".to_string(), "CL".to_string()],
/// );
/// assert_eq!(
///     url,
///     "https://api.example.com/matches?dateFrom=2026-08-08&dateTo=2026-08-09&competitions=PL,CL"
/// );
/// ```
pub fn build_matches_url(
    api_domain: &str,
    date_from: &str,
    date_to: &str,
    competitions: &[String],
) -> String {
    let mut url = format!("{api_domain}/matches?dateFrom={date_from}&dateTo={date_to}");
    if !competitions.is_empty() {
        url.push_str("&competitions=");
        url.push_str(&competitions.join(","));
    }
    url
}

/// Builds a single-match URL.
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_match_url;
///
/// let url = build_match_url("https://api.example.com", 327117);
/// assert_eq!(url, "https://api.example.com/matches/327117");
/// ```
pub fn build_match_url(api_domain: &str, match_id: i64) -> String {
    format!("{api_domain}/matches/{match_id}")
}

/// Builds a standings URL for a competition code.
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", "PL");
/// assert_eq!(url, "https://api.example.com/competitions/PL/standings");
/// ```
pub fn build_standings_url(api_domain: &str, competition_code: &str) -> String {
    format!("{api_domain}/competitions/{competition_code}/standings")
}

/// Builds a top scorers URL for a competition code.
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_scorers_url;
///
/// let url = build_scorers_url("https://api.example.com", "PL", 10);
/// assert_eq!(url, "https://api.example.com/competitions/PL/scorers?limit=10");
/// ```
pub fn build_scorers_url(api_domain: &str, competition_code: &str, limit: u32) -> String {
    format!("{api_domain}/competitions/{competition_code}/scorers?limit={limit}")
}

/// Builds a team detail URL.
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_team_url;
///
/// let url = build_team_url("https://api.example.com", 57);
/// assert_eq!(url, "https://api.example.com/teams/57");
/// ```
pub fn build_team_url(api_domain: &str, team_id: i64) -> String {
    format!("{api_domain}/teams/{team_id}")
}

/// Builds a person lookup URL.
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_person_url;
///
/// let url = build_person_url("https://api.example.com", 44);
/// assert_eq!(url, "https://api.example.com/persons/44");
/// ```
pub fn build_person_url(api_domain: &str, person_id: i64) -> String {
    format!("{api_domain}/persons/{person_id}")
}

/// Builds the competition listing URL.
///
/// # Example
/// ```
/// use matchday::data_fetcher::api::build_competitions_url;
///
/// let url = build_competitions_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/competitions");
/// ```
pub fn build_competitions_url(api_domain: &str) -> String {
    format!("{api_domain}/competitions")
}
