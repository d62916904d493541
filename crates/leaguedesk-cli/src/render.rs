// Plain-text page output. Page content goes to stdout, failures to stderr.

use leaguedesk_api::{League, Season};
use leaguedesk_core::pages::TeamDetailPage;
use leaguedesk_core::standings::{favorites_badge, StandingRow};
use leaguedesk_core::{FavoriteTeam, FavoritesStore, LeagueCategory, Toast};

const STAR: &str = "*";

pub fn error_line(message: &str) {
    eprintln!("Error: {}", message);
}

pub fn toast(toast: &Toast) {
    if toast.is_error() {
        eprintln!("{}", toast);
    } else {
        println!("{}", toast);
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

pub fn leagues(leagues: &[&League]) {
    if leagues.is_empty() {
        println!("No leagues found.");
        return;
    }

    println!("{:>5}  {:<40}  {}", "ID", "LEAGUE", "ABBR");
    for league in leagues {
        println!(
            "{:>5}  {:<40}  {}",
            league.id,
            truncate(&league.name, 40),
            league.abbr
        );
    }
    println!("\n{} league(s). Open one with `leaguedesk standings <ID>`.", leagues.len());
}

pub fn category_tabs(counts: &[(LeagueCategory, usize)], current: LeagueCategory) {
    let tabs: Vec<String> = counts
        .iter()
        .map(|(category, count)| {
            let tab = format!("{} ({})", category.label(), count);
            if *category == current {
                format!("[{}]", tab)
            } else {
                tab
            }
        })
        .collect();
    println!("{}\n", tabs.join("  "));
}

pub fn standings(league_name: &str, season: i32, rows: &[&StandingRow], favorites: &FavoritesStore) {
    println!("{} - {} season\n", league_name, season);
    if rows.is_empty() {
        println!("No teams found.");
        return;
    }

    println!(
        "{:>3}  {:<28} {:>6} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
        "POS", "TEAM", "ID", "GP", "W", "D", "L", "GF", "GA", "GD", "PTS"
    );
    for row in rows {
        let stats = row.stats();
        let team = &row.standing.team;
        let marker = if favorites.is_favorite(&row.team_id()) {
            STAR
        } else {
            " "
        };
        println!(
            "{:>3}  {:<28} {:>6} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>+4} {:>4}",
            row.position,
            format!("{}{}", marker, truncate(&team.name, 27)),
            team.id,
            stats.played,
            stats.won,
            stats.drawn,
            stats.lost,
            stats.goals_for,
            stats.goals_against,
            stats.goal_difference,
            stats.points,
        );
    }
    println!("\n{} marks a favorite.", STAR);
}

pub fn seasons(seasons: &[Season]) {
    if seasons.is_empty() {
        println!("No seasons available.");
        return;
    }
    for season in seasons {
        let name = if season.display_name.is_empty() {
            season.year.to_string()
        } else {
            season.display_name.clone()
        };
        println!("{:>6}  {}", season.year, name);
    }
}

pub fn team(page: &TeamDetailPage, favorites: &FavoritesStore) {
    let (Some(row), Some(stats)) = (page.row(), page.stats()) else {
        return;
    };
    let team = &row.standing.team;

    println!("{} ({})", team.name, team.short_display_name);
    println!("{} - {} season", page.league_name(), page.season());
    if let Some(badge) = page.badge() {
        println!("Position {} - {}", row.position, badge);
    }
    println!();
    println!("  Played          {}", stats.played);
    println!("  Won             {}", stats.won);
    println!("  Drawn           {}", stats.drawn);
    println!("  Lost            {}", stats.lost);
    println!("  Goals for       {}", stats.goals_for);
    println!("  Goals against   {}", stats.goals_against);
    println!("  Goal difference {:+}", stats.goal_difference);
    println!("  Points          {}", stats.points);
    println!("  Win rate        {}%", stats.win_rate());
    println!();

    if page.is_favorite(favorites) {
        println!("{} In your favorites", STAR);
    } else {
        println!("Not in favorites. Add with --toggle-favorite.");
    }
}

pub fn favorites(teams: &[&FavoriteTeam]) {
    println!(
        "{:>6}  {:<26} {:<24} {:>3} {:>4} {:>3} {:>8}  {:<11} {}",
        "ID", "TEAM", "LEAGUE", "POS", "PTS", "GP", "W-D-L", "STATUS", "ADDED"
    );
    for team in teams {
        println!(
            "{:>6}  {:<26} {:<24} {:>3} {:>4} {:>3} {:>8}  {:<11} {}",
            team.id,
            truncate(&team.name, 26),
            truncate(&team.league, 24),
            team.position,
            team.points,
            team.played,
            format!("{}-{}-{}", team.won, team.drawn, team.lost),
            favorites_badge(team.position),
            team.date_added.format("%Y-%m-%d"),
        );
    }
}
