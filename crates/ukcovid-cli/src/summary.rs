//! `summary` command: one fetch, one printed summary block.

use ukcovid_api::StatsClient;
use ukcovid_core::{AppConfig, Location};
use ukcovid_metrics::format::{long_date, thousands};
use ukcovid_metrics::Delta;
use ukcovid_refresh::{Refresher, ViewState};

pub(crate) async fn run(config: &AppConfig, location: Location, json: bool) -> anyhow::Result<()> {
    let client = StatsClient::new(config)?;
    let refresher = Refresher::new(client, config);
    refresher.reload(location, false).await;
    let view = refresher.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    print_summary(location, &view);
    Ok(())
}

/// Prints the summary block for a view. A failed fetch leaves the
/// counts at their previous values (zeroes on first run) with the
/// error in the status line.
pub(crate) fn print_summary(location: Location, view: &ViewState) {
    let summary = &view.snapshot.summary;

    println!("{location}");
    if let Some(date) = summary.latest_date {
        println!("Latest figures for {}", long_date(date));
    }

    let cases_change = summary
        .daily
        .cases_change
        .map(Delta::label)
        .unwrap_or_default();
    let deaths_change = summary
        .daily
        .deaths_change
        .map(Delta::label)
        .unwrap_or_default();
    println!(
        "Cases:  {}{cases_change}, {} total",
        thousands(summary.daily.cases),
        summary.totals.cases_label()
    );
    println!(
        "Deaths: {}{deaths_change}, {} total",
        thousands(summary.daily.deaths),
        summary.totals.deaths_label()
    );

    if let Some(weekly) = &summary.weekly {
        println!(
            "Weekly cases:  {}{}",
            weekly.cases.total_label(),
            weekly.cases.change_label()
        );
        println!(
            "Weekly deaths: {}{}",
            weekly.deaths.total_label(),
            weekly.deaths.change_label()
        );
    }

    println!();
    println!("{}", view.status);
}
