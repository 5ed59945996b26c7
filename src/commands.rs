//! Command handling for the CLI binary
//!
//! Splits the work main() dispatches into testable pieces: argument
//! validation, config and favorites maintenance, and the network-backed
//! lookups with their plain-text output.

use tokio_util::sync::CancellationToken;

use crate::cli::Args;
use crate::config::Config;
use crate::config::user_prompts::prompt_for_api_token;
use crate::data_fetcher::api::{
    ApiClient, fetch_competitions, fetch_match, fetch_matches, fetch_matches_for_competitions,
    fetch_person, fetch_scorers, fetch_standings, fetch_team, today_local_date,
};
use crate::data_fetcher::models::{Match, Person, TableEntry, TeamDetail};
use crate::error::AppError;
use crate::favorites::Favorites;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let lookups = [
        args.match_id.is_some(),
        args.standings.is_some(),
        args.scorers.is_some(),
        args.team_id.is_some(),
        args.person_id.is_some(),
        args.list_competitions,
    ]
    .into_iter()
    .filter(|selected| *selected)
    .count();

    if lookups > 1 {
        return Err(AppError::config_error(
            "Only one lookup (--match, --standings, --scorers, --team, --person, --competitions) may be requested per run",
        ));
    }

    if args.favorites_only && lookups > 0 {
        return Err(AppError::config_error(
            "--favorites only applies to the match listing",
        ));
    }

    Ok(())
}

/// Handles configuration maintenance flags.
///
/// Returns true when a config operation was performed and the process
/// should exit without touching the network.
pub async fn handle_config_commands(args: &Args) -> Result<bool, AppError> {
    if !crate::cli::is_config_operation(args) {
        return Ok(false);
    }

    if args.list_config {
        Config::display().await?;
        return Ok(true);
    }

    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_token) = &args.new_api_token {
        config.api_token = if new_token.is_empty() {
            prompt_for_api_token().await?
        } else {
            new_token.clone()
        };
    }

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(true)
}

/// Handles follow/unfollow/list operations on the favorites file.
///
/// Returns true when a favorites operation was performed and the process
/// should exit without touching the network.
pub async fn handle_favorites_commands(args: &Args) -> Result<bool, AppError> {
    if let Some(team_id) = args.follow_team {
        let mut favorites = Favorites::load().await?;
        if favorites.follow(team_id) {
            favorites.save().await?;
            println!("Now following team {team_id}");
        } else {
            println!("Already following team {team_id}");
        }
        return Ok(true);
    }

    if let Some(team_id) = args.unfollow_team {
        let mut favorites = Favorites::load().await?;
        if favorites.unfollow(team_id) {
            favorites.save().await?;
            println!("Stopped following team {team_id}");
        } else {
            println!("Team {team_id} was not followed");
        }
        return Ok(true);
    }

    if args.list_favorites {
        let favorites = Favorites::load().await?;
        if favorites.is_empty() {
            println!("No followed teams. Use --follow <TEAM_ID> to add one.");
        } else {
            println!("Followed teams:");
            for team_id in &favorites.team_ids {
                println!("  {team_id}");
            }
        }
        return Ok(true);
    }

    Ok(false)
}

/// Runs the requested network-backed operation and prints its result.
///
/// Lookup misses ("no such team") and a Ctrl-C interrupt print a short
/// message and exit cleanly; everything else propagates as an error.
pub async fn run(
    args: &Args,
    config: &Config,
    client: &ApiClient,
    token: &CancellationToken,
) -> Result<(), AppError> {
    match run_lookup(args, config, client, token).await {
        Err(e) if e.is_not_found() => {
            println!("{e}");
            Ok(())
        }
        Err(e) if e.is_cancellation() => {
            println!("Interrupted.");
            Ok(())
        }
        other => other,
    }
}

async fn run_lookup(
    args: &Args,
    config: &Config,
    client: &ApiClient,
    token: &CancellationToken,
) -> Result<(), AppError> {
    if let Some(match_id) = args.match_id {
        let game = fetch_match(client, config, match_id, token).await?;
        print_match_detail(&game);
        return Ok(());
    }

    if let Some(code) = &args.standings {
        let standings = fetch_standings(client, config, code, token).await?;
        match standings.total_table() {
            Some(table) => {
                println!("{code} standings");
                println!("{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
                    "#", "Team", "P", "W", "D", "L", "GD", "Pts");
                for entry in &table.table {
                    println!("{}", format_table_row(entry));
                }
            }
            None => println!("No overall table available for {code}"),
        }
        return Ok(());
    }

    if let Some(code) = &args.scorers {
        let scorers = fetch_scorers(client, config, code, args.limit, token).await?;
        println!("{code} top scorers");
        for (rank, scorer) in scorers.scorers.iter().enumerate() {
            println!(
                "{:>3}. {:<24} {:<20} {:>3} goals{}",
                rank + 1,
                scorer.player.name,
                scorer.team.display_name(),
                scorer.goals.unwrap_or(0),
                match scorer.assists {
                    Some(assists) => format!(", {assists} assists"),
                    None => String::new(),
                }
            );
        }
        return Ok(());
    }

    if let Some(team_id) = args.team_id {
        let team = fetch_team(client, config, team_id, token).await?;
        print_team(&team);
        return Ok(());
    }

    if let Some(person_id) = args.person_id {
        let person = fetch_person(client, config, person_id, token).await?;
        print_person(&person);
        return Ok(());
    }

    if args.list_competitions {
        let competitions = fetch_competitions(client, config, token).await?;
        for competition in &competitions.competitions {
            println!("{:<6} {}", competition.code, competition.name);
        }
        return Ok(());
    }

    // Default operation: the match listing
    let date_from = args.date.clone().unwrap_or_else(today_local_date);
    let date_to = args.date_to.clone().unwrap_or_else(|| date_from.clone());

    let mut matches = if args.competitions.len() > 1 {
        fetch_matches_for_competitions(
            client,
            config,
            &date_from,
            &date_to,
            &args.competitions,
            token,
        )
        .await?
    } else {
        fetch_matches(client, config, &date_from, &date_to, &args.competitions, token)
            .await?
            .matches
    };

    if args.favorites_only {
        let favorites = Favorites::load().await?;
        if favorites.is_empty() {
            println!("No followed teams. Use --follow <TEAM_ID> to add one.");
            return Ok(());
        }
        matches.retain(|game| game.involves_any_team(&favorites.team_ids));
    }

    if matches.is_empty() {
        if date_from == date_to {
            println!("No matches on {date_from}");
        } else {
            println!("No matches between {date_from} and {date_to}");
        }
        return Ok(());
    }

    for game in &matches {
        println!("{}", format_match_line(game));
    }
    Ok(())
}

/// One listing line: kickoff time, teams, score and a status marker
pub fn format_match_line(game: &Match) -> String {
    let kickoff = game.utc_date.get(11..16).unwrap_or("--:--");
    let line = format!(
        "{kickoff}  {:<22} {:^5} {:<22}",
        game.home_team.display_name(),
        game.result_line(),
        game.away_team.display_name(),
    );
    let suffix = status_suffix(game);
    if suffix.is_empty() {
        line.trim_end().to_string()
    } else {
        format!("{line} {suffix}")
    }
}

/// Short status marker shown at the end of a listing line
fn status_suffix(game: &Match) -> String {
    if game.is_live() {
        match game.minute {
            Some(minute) => format!("LIVE {minute}'"),
            None => "LIVE".to_string(),
        }
    } else if game.is_finished() {
        "FT".to_string()
    } else if matches!(game.status.as_str(), "TIMED" | "SCHEDULED") {
        String::new()
    } else {
        game.status.clone()
    }
}

/// One standings row, aligned with the header printed above it
pub fn format_table_row(entry: &TableEntry) -> String {
    format!(
        "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>+4} {:>4}",
        entry.position,
        entry.team.display_name(),
        entry.played_games,
        entry.won,
        entry.draw,
        entry.lost,
        entry.goal_difference,
        entry.points,
    )
}

fn print_match_detail(game: &Match) {
    println!("{}", format_match_line(game));
    if let Some(competition) = &game.competition {
        println!("Competition: {} ({})", competition.name, competition.code);
    }
    if let Some(matchday) = game.matchday {
        println!("Matchday:    {matchday}");
    }
    println!("Kickoff:     {}", game.utc_date);
    println!("Status:      {}", game.status);
    if let (Some(home), Some(away)) = (game.score.half_time.home, game.score.half_time.away) {
        println!("Half-time:   {home}-{away}");
    }
    for referee in &game.referees {
        println!("Referee:     {}", referee.name);
    }
}

fn print_team(team: &TeamDetail) {
    println!("{} ({})", team.name, team.tla.as_deref().unwrap_or("-"));
    if let Some(venue) = &team.venue {
        println!("Venue:   {venue}");
    }
    if let Some(founded) = team.founded {
        println!("Founded: {founded}");
    }
    if let Some(colors) = &team.club_colors {
        println!("Colors:  {colors}");
    }
    if !team.running_competitions.is_empty() {
        let codes: Vec<&str> = team
            .running_competitions
            .iter()
            .map(|competition| competition.code.as_str())
            .collect();
        println!("Playing: {}", codes.join(", "));
    }
    if let Some(coach) = &team.coach {
        println!("Coach:   {}", coach.name);
    }
    if !team.squad.is_empty() {
        println!("Squad:");
        for player in &team.squad {
            println!(
                "  {:<26} {}",
                player.name,
                player.position.as_deref().unwrap_or("-")
            );
        }
    }
}

fn print_person(person: &Person) {
    println!("{}", person.name);
    if let Some(position) = &person.position {
        println!("Position:    {position}");
    }
    if let Some(nationality) = &person.nationality {
        println!("Nationality: {nationality}");
    }
    if let Some(date_of_birth) = &person.date_of_birth {
        println!("Born:        {date_of_birth}");
    }
    if let Some(shirt_number) = person.shirt_number {
        println!("Shirt:       {shirt_number}");
    }
    if let Some(team) = &person.current_team {
        println!("Team:        {}", team.display_name());
    }
}
