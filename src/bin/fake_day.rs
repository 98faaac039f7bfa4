use chrono::{Local, NaiveDate};

use teamday::config::LeagueRules;
use teamday::daily_team::compose_daily_team;
use teamday::fake_feed::SyntheticFeed;
use teamday::feed::StatsFeed;
use teamday::summary;

// Intentionally simple: composes a team from synthetic records and prints
// it. No stats file is touched; handy for eyeballing the selection logic.
fn main() -> anyhow::Result<()> {
    let date = std::env::args()
        .nth(1)
        .and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive());

    let records = SyntheticFeed::new(6).daily_records(date)?;
    let team = compose_daily_team(&records, date, &LeagueRules::default());
    print!("{}", summary::format_daily_team(&team));
    Ok(())
}
