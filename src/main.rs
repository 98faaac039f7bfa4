use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use log::{LevelFilter, error, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use teamday::config::LeagueRules;
use teamday::daily_team::compose_daily_team;
use teamday::feed::{JsonFeed, StatsFeed};
use teamday::store::{JsonFileStore, StatsStore};
use teamday::summary;
use teamday::tracker;
use teamday::week_window;
use teamday::weekly_team::compose_weekly_team;

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("day") => run_day(opt_date(args, "--date")?),
        Some("week") => run_week(opt_date(args, "--date")?),
        Some("collect") => {
            let from = opt_date(args, "--from")?.context("collect needs --from YYYY-MM-DD")?;
            let to = opt_date(args, "--to")?.context("collect needs --to YYYY-MM-DD")?;
            run_collect(from, to)
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage: teamday day [--date YYYY-MM-DD]");
    println!("       teamday week [--date YYYY-MM-DD]");
    println!("       teamday collect --from YYYY-MM-DD --to YYYY-MM-DD");
}

fn opt_date(args: &[String], flag: &str) -> Result<Option<NaiveDate>> {
    let Some(idx) = args.iter().position(|arg| arg == flag) else {
        return Ok(None);
    };
    let raw = args
        .get(idx + 1)
        .with_context(|| format!("{flag} needs a YYYY-MM-DD value"))?;
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date {raw}"))?;
    Ok(Some(date))
}

fn run_day(date: Option<NaiveDate>) -> Result<()> {
    let rules = LeagueRules::from_env();
    let date = date.unwrap_or_else(|| {
        week_window::scoring_date(Local::now().naive_local(), rules.day_start_hour)
    });
    let feed = JsonFeed::from_env();
    let store = JsonFileStore::from_env();
    if !process_day(&feed, &store, &rules, date)? {
        warn!("no team could be composed for {date}");
    }
    Ok(())
}

/// Runs one date end to end. A missing or empty day is a skip, not an
/// error; only a failed save comes back as `Err`.
fn process_day(
    feed: &impl StatsFeed,
    store: &JsonFileStore,
    rules: &LeagueRules,
    date: NaiveDate,
) -> Result<bool> {
    let records = match feed.daily_records(date) {
        Ok(records) => records,
        Err(err) => {
            warn!("no stats for {date}: {err:#}");
            return Ok(false);
        }
    };
    let mut team = compose_daily_team(&records, date, rules);
    if team.slots.is_empty() {
        return Ok(false);
    }

    let window = week_window::week_window_for_date(date, rules.week_start);
    tracker::record_and_save(store, window, &mut team)?;
    info!(
        "recorded {} selections for {date} into week {}",
        team.slots.values().flatten().count(),
        window.key()
    );
    print!("{}", summary::format_daily_team(&team));
    Ok(true)
}

fn run_week(date: Option<NaiveDate>) -> Result<()> {
    let rules = LeagueRules::from_env();
    // Without an explicit date, report on the week that just finished.
    let window = match date {
        Some(date) => week_window::week_window_for_date(date, rules.week_start),
        None => week_window::previous_week(
            Local::now().naive_local(),
            rules.week_start,
            rules.day_start_hour,
        ),
    };

    let store = JsonFileStore::from_env();
    let stats = store.load();
    let team = compose_weekly_team(&stats, window, &rules);
    if team.slots.is_empty() {
        warn!("no recorded selections for week {}", window.key());
        return Ok(());
    }
    print!("{}", summary::format_weekly_team(&team));
    Ok(())
}

fn run_collect(from: NaiveDate, to: NaiveDate) -> Result<()> {
    let rules = LeagueRules::from_env();
    let feed = JsonFeed::from_env();
    let store = JsonFileStore::from_env();

    let mut recorded = 0usize;
    let mut date = from;
    while date <= to {
        match process_day(&feed, &store, &rules, date) {
            Ok(true) => recorded += 1,
            Ok(false) => warn!("nothing to record for {date}"),
            // One bad date never terminates the batch.
            Err(err) => error!("failed to record {date}: {err:#}"),
        }
        date += Duration::days(1);
    }
    info!("recorded {recorded} days between {from} and {to}");
    Ok(())
}
