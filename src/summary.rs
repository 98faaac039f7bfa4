//! Plain-text team summaries: the textual fallback handed to the delivery
//! collaborator when no collage is sent. The engine does not know or care
//! which channel actually carries them.

use std::fmt::Write;

use crate::daily_team::DailyTeam;
use crate::weekly_team::WeeklyTeam;

pub fn format_daily_team(team: &DailyTeam) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Team of the day {}", team.date.format("%Y-%m-%d"));
    for (position, slots) in &team.slots {
        for slot in slots {
            let grade = slot
                .grade
                .map(|g| format!(" [{g}]"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{:<2} {} {:.1}{}",
                position.code(),
                slot.name,
                slot.points,
                grade
            );
        }
    }
    let _ = writeln!(out, "Total: {:.1}", team.total_points);
    out
}

pub fn format_weekly_team(team: &WeeklyTeam) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Team of the week {} - {}",
        team.window.start.format("%Y-%m-%d"),
        team.window.end.format("%Y-%m-%d")
    );
    for (position, candidates) in &team.slots {
        for candidate in candidates {
            let _ = writeln!(
                out,
                "{:<2} {} [{}] {} days, {:.1} pts",
                position.code(),
                candidate.name,
                candidate.grade,
                candidate.appearances,
                candidate.total_points
            );
        }
    }
    out
}
