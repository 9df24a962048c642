//! `chart` command: terminal sparklines over the normalized series.

use ukcovid_api::StatsClient;
use ukcovid_core::{AppConfig, ChartWindow, Location};
use ukcovid_metrics::chart;

const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub(crate) async fn run(
    config: &AppConfig,
    location: Location,
    window: ChartWindow,
    emphasized: bool,
) -> anyhow::Result<()> {
    let client = StatsClient::new(config)?;
    let outcome = client.fetch(location).await?;
    let data = chart::derive(&outcome.records);

    let deaths = if emphasized {
        &data.deaths_emphasized
    } else {
        &data.deaths_relative
    };
    let cases = chart::tail(&data.cases, window);
    let deaths = chart::tail(deaths, window);

    println!("{location} {window} ({} days)", cases.len());
    println!("cases  {}", sparkline(cases));
    println!("deaths {}", sparkline(deaths));
    Ok(())
}

/// One block character per normalized point.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sparkline(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| {
            let idx = (v.clamp(0.0, 1.0) * 7.0).round() as usize;
            SPARK_CHARS[idx.min(SPARK_CHARS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_spans_the_block_range() {
        let line = sparkline(&[0.0, 0.5, 1.0]);
        assert_eq!(line, "▁▅█");
    }

    #[test]
    fn sparkline_clamps_out_of_range_values() {
        let line = sparkline(&[-0.5, 2.0]);
        assert_eq!(line, "▁█");
    }
}
