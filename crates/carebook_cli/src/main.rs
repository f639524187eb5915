//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `carebook_core` wiring without any UI host.
//! - Print a deterministic summary of the seed data for a given week.
//!
//! Usage: `carebook_cli [YYYY-MM-DD]` (defaults to today).

use carebook_core::{
    init_from_config, CalendarPage, ClientStats, DataSource, LogConfig, SeedData, StaffStats,
};
use chrono::{Local, NaiveDate};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("carebook_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = LogConfig::from_env()?;
    init_from_config(&config)?;

    let today = Local::now().date_naive();
    let anchor = match std::env::args().nth(1) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|err| format!("invalid anchor date `{raw}`: {err}"))?,
        None => today,
    };

    let seed = SeedData::embedded().map_err(|err| err.to_string())?;
    log::info!("event=cli_start module=cli status=ok anchor={anchor}");

    println!("carebook_core version={}", carebook_core::core_version());

    let page = CalendarPage::new(anchor);
    let view = page.view(seed.appointments(), today);
    println!("{} ({} appointments)", view.period_label, view.total);
    for day in &view.days {
        let marker = if day.is_today { " *" } else { "" };
        println!(
            "  {} {:>2}{marker}",
            day.date.format("%a %b %-d"),
            day.appointments.len()
        );
    }

    let staff = StaffStats::collect(seed.staff());
    println!(
        "staff total={} active={} on_leave={}",
        staff.total, staff.active, staff.on_leave
    );
    let clients = ClientStats::collect(seed.clients());
    println!(
        "clients total={} visiting_angels={} babysitting_angels={}",
        clients.total, clients.visiting_angels, clients.babysitting_angels
    );

    Ok(())
}
