use std::fmt;
use std::str::FromStr;

/// A reporting area served by the statistics API.
///
/// Selects the `filters` expression on the request URL; not persisted
/// beyond the current invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Uk,
    England,
    NorthernIreland,
    Scotland,
    Wales,
}

impl Location {
    /// The `filters` query expression for this area.
    ///
    /// The space in "northern ireland" is pre-encoded because the whole
    /// expression is passed through verbatim as a single query value.
    #[must_use]
    pub fn api_filter(self) -> &'static str {
        match self {
            Location::Uk => "areaType=overview",
            Location::England => "areaType=nation;areaName=england",
            Location::NorthernIreland => "areaType=nation;areaName=northern%20ireland",
            Location::Scotland => "areaType=nation;areaName=scotland",
            Location::Wales => "areaType=nation;areaName=wales",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Uk => "United Kingdom",
            Location::England => "England",
            Location::NorthernIreland => "Northern Ireland",
            Location::Scotland => "Scotland",
            Location::Wales => "Wales",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uk" | "united-kingdom" => Ok(Location::Uk),
            "england" => Ok(Location::England),
            "northern-ireland" | "ni" => Ok(Location::NorthernIreland),
            "scotland" => Ok(Location::Scotland),
            "wales" => Ok(Location::Wales),
            other => Err(format!(
                "unknown location '{other}' (expected uk, england, northern-ireland, scotland or wales)"
            )),
        }
    }
}

/// How far back a rendered chart reaches, as a number of daily points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartWindow {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    All,
}

impl ChartWindow {
    /// Number of data points covered by this window.
    ///
    /// `All` maps to the source's 1000-entry response cap.
    #[must_use]
    pub fn points(self) -> usize {
        match self {
            ChartWindow::OneWeek => 7,
            ChartWindow::OneMonth => 31,
            ChartWindow::ThreeMonths => 91,
            ChartWindow::SixMonths => 183,
            ChartWindow::All => 1000,
        }
    }
}

impl fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartWindow::OneWeek => "1W",
            ChartWindow::OneMonth => "1M",
            ChartWindow::ThreeMonths => "3M",
            ChartWindow::SixMonths => "6M",
            ChartWindow::All => "ALL",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ChartWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1w" => Ok(ChartWindow::OneWeek),
            "1m" => Ok(ChartWindow::OneMonth),
            "3m" => Ok(ChartWindow::ThreeMonths),
            "6m" => Ok(ChartWindow::SixMonths),
            "all" => Ok(ChartWindow::All),
            other => Err(format!(
                "unknown window '{other}' (expected 1w, 1m, 3m, 6m or all)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_filter_is_overview() {
        assert_eq!(Location::Uk.api_filter(), "areaType=overview");
    }

    #[test]
    fn nation_filters_carry_area_name() {
        assert_eq!(
            Location::NorthernIreland.api_filter(),
            "areaType=nation;areaName=northern%20ireland"
        );
        assert_eq!(
            Location::Wales.api_filter(),
            "areaType=nation;areaName=wales"
        );
    }

    #[test]
    fn location_parses_kebab_case() {
        assert_eq!(
            "northern-ireland".parse::<Location>().unwrap(),
            Location::NorthernIreland
        );
        assert_eq!("UK".parse::<Location>().unwrap(), Location::Uk);
    }

    #[test]
    fn location_rejects_unknown() {
        assert!("mars".parse::<Location>().is_err());
    }

    #[test]
    fn window_point_counts() {
        assert_eq!(ChartWindow::OneWeek.points(), 7);
        assert_eq!(ChartWindow::OneMonth.points(), 31);
        assert_eq!(ChartWindow::ThreeMonths.points(), 91);
        assert_eq!(ChartWindow::SixMonths.points(), 183);
        assert_eq!(ChartWindow::All.points(), 1000);
    }

    #[test]
    fn window_parses_labels() {
        assert_eq!("3m".parse::<ChartWindow>().unwrap(), ChartWindow::ThreeMonths);
        assert_eq!("ALL".parse::<ChartWindow>().unwrap(), ChartWindow::All);
        assert!("2y".parse::<ChartWindow>().is_err());
    }
}
