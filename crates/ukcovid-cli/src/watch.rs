//! `watch` command: the foreground polling loop.

use std::sync::Arc;

use ukcovid_api::StatsClient;
use ukcovid_core::{AppConfig, Location};
use ukcovid_refresh::Refresher;

use crate::summary::print_summary;

pub(crate) async fn run(config: &AppConfig, location: Location, clear: bool) -> anyhow::Result<()> {
    let client = StatsClient::new(config)?;
    let refresher = Arc::new(Refresher::new(client, config));

    if clear {
        // Manual reload semantics: drop anything on screen, fetch now.
        refresher.reload(location, true).await;
        print_summary(location, &refresher.view());
    }

    tracing::info!(%location, interval_secs = config.tick_interval_secs, "watching for updates");

    let loop_handle = Arc::clone(&refresher).run(location, move |view| {
        println!("----");
        print_summary(location, view);
    });

    tokio::select! {
        () = loop_handle => {},
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received shutdown signal, stopping watch loop");
        }
    }
    Ok(())
}
