//! Status line rendering for the footer of the presentation layer.

use chrono::{DateTime, Utc};

use crate::state::FetchState;

/// Renders the two-line status text.
///
/// An error message wins over everything; the initial loading state
/// wins over the regular "last updated / last checked" pair.
#[must_use]
pub fn status_line(state: &FetchState, now: DateTime<Utc>) -> String {
    if let Some(error) = &state.last_error {
        return error.clone();
    }
    if state.is_loading(now) {
        return "Loading...".to_owned();
    }

    let updated = format!(
        "Last updated on {}",
        state.last_updated.format("%A %d %B %Y at %-I:%M%P")
    );
    let checked = if state.is_fetching() {
        "Checking...".to_owned()
    } else {
        format!("Last checked {}", time_ago(now, state.last_checked))
    };
    format!("{updated}\n{checked}")
}

fn time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds().max(0);
    if seconds < 60 {
        return "moments ago".to_owned();
    }
    let minutes = seconds / 60;
    if minutes == 1 {
        "1 minute ago".to_owned()
    } else {
        format!("{minutes} minutes ago")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn now() -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2021, 1, 5)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap()
            .and_utc()
    }

    fn loaded_state() -> FetchState {
        let mut s = FetchState::with_thresholds(Duration::minutes(15), Duration::days(120));
        s.begin_fetch();
        s.complete_success(now(), Some(now()));
        s
    }

    #[test]
    fn initial_state_shows_loading() {
        let s = FetchState::with_thresholds(Duration::minutes(15), Duration::days(120));
        assert_eq!(status_line(&s, now()), "Loading...");
    }

    #[test]
    fn error_text_wins() {
        let mut s = loaded_state();
        s.begin_fetch();
        s.complete_failure(now(), "network error: timed out".to_owned());
        assert_eq!(status_line(&s, now()), "network error: timed out");
    }

    #[test]
    fn fresh_state_shows_updated_and_checked() {
        let s = loaded_state();
        let line = status_line(&s, now() + Duration::seconds(30));
        assert_eq!(
            line,
            "Last updated on Tuesday 05 January 2021 at 4:00pm\nLast checked moments ago"
        );
    }

    #[test]
    fn minutes_ago_pluralises() {
        let s = loaded_state();
        let one = status_line(&s, now() + Duration::seconds(90));
        assert!(one.ends_with("Last checked 1 minute ago"), "{one}");
        let five = status_line(&s, now() + Duration::minutes(5));
        assert!(five.ends_with("Last checked 5 minutes ago"), "{five}");
    }

    #[test]
    fn in_flight_fetch_shows_checking() {
        let mut s = loaded_state();
        s.begin_fetch();
        let line = status_line(&s, now());
        assert!(line.ends_with("Checking..."), "{line}");
    }
}
