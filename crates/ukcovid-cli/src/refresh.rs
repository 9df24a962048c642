//! `refresh` command: the single-shot background check.

use ukcovid_api::StatsClient;
use ukcovid_core::{AppConfig, Location};
use ukcovid_metrics::Notification;
use ukcovid_refresh::{run_background_refresh, BackgroundResult, StateStore, UpdateSink};

/// Prints the outbound triggers instead of delivering them to a
/// widget host or notification center.
struct StdoutSink;

impl UpdateSink for StdoutSink {
    fn reload_views(&self) {
        println!("-> reload widget timelines");
    }

    fn notify(&self, notification: &Notification) {
        println!("-> notification:");
        println!("{}", notification.title);
        println!("{}", notification.body);
    }
}

pub(crate) async fn run(config: &AppConfig, location: Location) -> anyhow::Result<()> {
    let client = StatsClient::new(config)?;
    let store = StateStore::new(config.state_path.clone());

    let result = run_background_refresh(&client, &store, location, &StdoutSink).await?;
    match result {
        BackgroundResult::NoTimestamp => {
            println!("response carried no data timestamp; nothing to do");
        }
        BackgroundResult::Unchanged => println!("no new data since last check"),
        BackgroundResult::Updated { notified: true } => println!("new data published"),
        BackgroundResult::Updated { notified: false } => {
            println!("new data published (notification content unchanged)");
        }
    }
    Ok(())
}
