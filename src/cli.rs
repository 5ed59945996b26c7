use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football scores, standings and scorers in your terminal.
///
/// With no arguments, lists today's matches across the competitions visible
/// to your API token. All outbound calls are paced by a request governor so
/// even busy listings stay under the provider's rate limit; tune the pace
/// with max_concurrent_requests and request_spacing_ms in the config file.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show matches for a specific date in YYYY-MM-DD format.
    /// If not provided, shows today's matches.
    #[arg(long = "date", short = 'd', help_heading = "Matches")]
    pub date: Option<String>,

    /// End of the date range in YYYY-MM-DD format. Defaults to the start
    /// date, i.e. a single day.
    #[arg(long = "to", value_name = "DATE", help_heading = "Matches")]
    pub date_to: Option<String>,

    /// Narrow the listing to a competition code (e.g. PL, CL, SA).
    /// Repeat the flag for several competitions.
    #[arg(long = "competition", short = 'c', value_name = "CODE", help_heading = "Matches")]
    pub competitions: Vec<String>,

    /// Only show matches involving followed teams
    #[arg(long = "favorites", short = 'f', help_heading = "Matches")]
    pub favorites_only: bool,

    /// Show details for a single match
    #[arg(long = "match", value_name = "MATCH_ID", help_heading = "Lookups")]
    pub match_id: Option<i64>,

    /// Show the league table for a competition code
    #[arg(long = "standings", value_name = "CODE", help_heading = "Lookups")]
    pub standings: Option<String>,

    /// Show top scorers for a competition code
    #[arg(long = "scorers", value_name = "CODE", help_heading = "Lookups")]
    pub scorers: Option<String>,

    /// Number of scorers to show with --scorers
    #[arg(
        long = "limit",
        value_name = "N",
        default_value_t = crate::constants::scorers::DEFAULT_LIMIT,
        help_heading = "Lookups"
    )]
    pub limit: u32,

    /// Show a team and its squad
    #[arg(long = "team", value_name = "TEAM_ID", help_heading = "Lookups")]
    pub team_id: Option<i64>,

    /// Show a player or staff member
    #[arg(long = "person", value_name = "PERSON_ID", help_heading = "Lookups")]
    pub person_id: Option<i64>,

    /// List the competitions visible to your API token
    #[arg(long = "competitions", help_heading = "Lookups")]
    pub list_competitions: bool,

    /// Start following a team
    #[arg(long = "follow", value_name = "TEAM_ID", help_heading = "Favorites")]
    pub follow_team: Option<i64>,

    /// Stop following a team
    #[arg(long = "unfollow", value_name = "TEAM_ID", help_heading = "Favorites")]
    pub unfollow_team: Option<i64>,

    /// List followed teams
    #[arg(long = "list-favorites", help_heading = "Favorites")]
    pub list_favorites: bool,

    /// Update API token in config. Will prompt for the token if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_TOKEN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_token: Option<String>,

    /// Update API domain in config
    #[arg(long = "set-api-domain", value_name = "DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror logs to stdout at debug level
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Whether the invocation only manages configuration and should not touch
/// the network at all.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_token.is_some()
        || args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_is_not_a_config_operation() {
        let args = Args::parse_from(["matchday"]);
        assert!(!is_config_operation(&args));
        assert!(args.date.is_none());
        assert_eq!(args.limit, crate::constants::scorers::DEFAULT_LIMIT);
    }

    #[test]
    fn test_config_flag_without_value_prompts_later() {
        let args = Args::parse_from(["matchday", "--config"]);
        assert_eq!(args.new_api_token.as_deref(), Some(""));
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_repeatable_competition_flag() {
        let args = Args::parse_from(["matchday", "-c", "PL", "-c", "CL"]);
        assert_eq!(args.competitions, vec!["PL", "CL"]);
    }

    #[test]
    fn test_lookup_flags_parse() {
        let args = Args::parse_from(["matchday", "--standings", "PL"]);
        assert_eq!(args.standings.as_deref(), Some("PL"));

        let args = Args::parse_from(["matchday", "--scorers", "PL", "--limit", "5"]);
        assert_eq!(args.scorers.as_deref(), Some("PL"));
        assert_eq!(args.limit, 5);

        let args = Args::parse_from(["matchday", "--match", "327117"]);
        assert_eq!(args.match_id, Some(327117));
    }
}
