use crate::{SortOrder, StationType};
use chrono::{DateTime, Utc};

/// Filters for the station listing endpoint.
///
/// Defaults to active stations only, page 0, 100 records per page, in
/// ascending order, with no name or type filter.
#[derive(Debug, Clone)]
pub struct StationQuery {
    /// Keeps only stations whose name contains this string.
    pub contains: Option<String>,

    pub station_type: Option<StationType>,

    /// Keeps only stations that reported data within the last 48 hours.
    pub active: bool,

    /// Zero-based page index.
    pub page: u32,

    /// Records per page. The API caps this at 1000; the value is passed
    /// through as given.
    pub size: u32,

    pub sort: SortOrder,
}

impl Default for StationQuery {
    fn default() -> StationQuery {
        StationQuery {
            contains: None,
            station_type: None,
            active: true,
            page: 0,
            size: 100,
            sort: SortOrder::Ascending,
        }
    }
}

/// Filters for the coordinate-based station listing endpoint.
///
/// Defaults to active stations within 50 km, page 0, 100 records per page,
/// in ascending order, with no type filter.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    pub active: bool,

    /// Maximum distance from the coordinate, in kilometers. The API caps
    /// this at 500.
    pub distance: u32,

    pub station_type: Option<StationType>,

    pub page: u32,

    pub size: u32,

    pub sort: SortOrder,
}

impl Default for LocationQuery {
    fn default() -> LocationQuery {
        LocationQuery {
            active: true,
            distance: 50,
            station_type: None,
            page: 0,
            size: 100,
            sort: SortOrder::Ascending,
        }
    }
}

/// Filters for the measurement endpoints.
///
/// Without a period the API returns the last 30 days of data. With only one
/// bound it returns the 30 days after/before that bound; with both bounds
/// the period may span at most 90 days.
#[derive(Debug, Clone)]
pub struct MeteoQuery {
    /// Earliest measurement timestamp, UTC.
    pub after: Option<DateTime<Utc>>,

    /// Latest measurement timestamp, UTC.
    pub before: Option<DateTime<Utc>>,

    pub page: u32,

    pub size: u32,

    pub sort: SortOrder,
}

impl Default for MeteoQuery {
    fn default() -> MeteoQuery {
        MeteoQuery {
            after: None,
            before: None,
            page: 0,
            size: 100,
            sort: SortOrder::Ascending,
        }
    }
}
