use crate::{LocationQuery, MeteoQuery, StationQuery};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Builds the station listing URL for the given filters.
///
/// Values are concatenated verbatim; callers supply URL-safe strings.
pub fn stations_url(base: &str, query: &StationQuery) -> String {
    let mut url = format!(
        "{}?active={}&page={}&size={}&sort={}",
        base,
        capitalised(query.active),
        query.page,
        query.size,
        query.sort.as_str()
    );
    if let Some(contains) = &query.contains {
        url.push_str("&contains=");
        url.push_str(contains);
    }
    if let Some(station_type) = query.station_type {
        url.push_str("&type=");
        url.push_str(station_type.as_str());
    }
    url
}

/// Builds the URL of a single station's detail record.
pub fn station_by_id_url(base: &str, id: &str) -> String {
    format!("{}/{}", base, id)
}

/// Builds the URL listing stations around a coordinate, closest first.
pub fn stations_by_coordinates_url(
    base: &str,
    latitude: f64,
    longitude: f64,
    query: &LocationQuery,
) -> String {
    let mut url = format!(
        "{}/location/{}/{}?active={}&distance={}&page={}&size={}&sort={}",
        base,
        latitude,
        longitude,
        capitalised(query.active),
        query.distance,
        query.page,
        query.size,
        query.sort.as_str()
    );
    if let Some(station_type) = query.station_type {
        url.push_str("&type=");
        url.push_str(station_type.as_str());
    }
    url
}

/// Builds the URL of one station's measurements.
pub fn meteo_by_station_id_url(base: &str, id: &str, query: &MeteoQuery) -> String {
    let mut url = format!(
        "{}/station/{}?page={}&size={}&sort={}",
        base,
        id,
        query.page,
        query.size,
        query.sort.as_str()
    );
    push_period(&mut url, query);
    url
}

/// Builds the URL of measurements from the `stations_count` stations
/// closest to a coordinate.
pub fn meteo_by_coordinates_url(
    base: &str,
    latitude: f64,
    longitude: f64,
    stations_count: u32,
    query: &MeteoQuery,
) -> String {
    let mut url = format!(
        "{}/location/{}/{}?stationsCount={}&page={}&size={}&sort={}",
        base,
        latitude,
        longitude,
        stations_count,
        query.page,
        query.size,
        query.sort.as_str()
    );
    push_period(&mut url, query);
    url
}

fn push_period(url: &mut String, query: &MeteoQuery) {
    if let Some(after) = &query.after {
        url.push_str("&after=");
        url.push_str(&after.format(TIMESTAMP_FORMAT).to_string());
    }
    if let Some(before) = &query.before {
        url.push_str("&before=");
        url.push_str(&before.format(TIMESTAMP_FORMAT).to_string());
    }
}

// The API expects capitalised booleans in its query strings.
fn capitalised(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SortOrder, StationType, METEO_URL, STATIONS_URL};
    use chrono::{TimeZone, Utc};

    #[test]
    fn stations_url_with_defaults() {
        assert_eq!(
            stations_url(STATIONS_URL, &StationQuery::default()),
            "https://edwin-meteo.apps.paas.psnc.pl/observationStation\
             ?active=True&page=0&size=100&sort=asc"
        );
    }

    #[test]
    fn stations_url_appends_type_after_pagination() {
        let query = StationQuery {
            station_type: Some(StationType::Weather),
            page: 2,
            ..Default::default()
        };
        assert_eq!(
            stations_url(STATIONS_URL, &query),
            "https://edwin-meteo.apps.paas.psnc.pl/observationStation\
             ?active=True&page=2&size=100&sort=asc&type=weather"
        );
    }

    #[test]
    fn stations_url_with_every_filter() {
        let query = StationQuery {
            contains: Some(String::from("35")),
            station_type: Some(StationType::Weather),
            active: true,
            page: 10,
            size: 50,
            sort: SortOrder::Descending,
        };
        assert_eq!(
            stations_url(STATIONS_URL, &query),
            "https://edwin-meteo.apps.paas.psnc.pl/observationStation\
             ?active=True&page=10&size=50&sort=desc&contains=35&type=weather"
        );
    }

    #[test]
    fn inactive_flag_is_capitalised() {
        let query = StationQuery {
            active: false,
            ..Default::default()
        };
        assert!(stations_url(STATIONS_URL, &query).contains("?active=False&"));
    }

    #[test]
    fn oversized_page_is_passed_through() {
        let query = StationQuery {
            size: 5000,
            ..Default::default()
        };
        assert!(stations_url(STATIONS_URL, &query).contains("&size=5000&"));
    }

    #[test]
    fn station_by_id_url_appends_the_id() {
        assert_eq!(
            station_by_id_url(STATIONS_URL, "PME34"),
            "https://edwin-meteo.apps.paas.psnc.pl/observationStation/PME34"
        );
    }

    #[test]
    fn stations_by_coordinates_url_embeds_the_coordinate() {
        assert_eq!(
            stations_by_coordinates_url(STATIONS_URL, 51.1, 21.6, &LocationQuery::default()),
            "https://edwin-meteo.apps.paas.psnc.pl/observationStation/location/51.1/21.6\
             ?active=True&distance=50&page=0&size=100&sort=asc"
        );
    }

    #[test]
    fn stations_by_coordinates_url_appends_type_last() {
        let query = LocationQuery {
            distance: 100,
            station_type: Some(StationType::Weather),
            size: 10,
            ..Default::default()
        };
        assert_eq!(
            stations_by_coordinates_url(STATIONS_URL, 51.1, 21.6, &query),
            "https://edwin-meteo.apps.paas.psnc.pl/observationStation/location/51.1/21.6\
             ?active=True&distance=100&page=0&size=10&sort=asc&type=weather"
        );
    }

    #[test]
    fn meteo_by_station_id_url_appends_after_then_before() {
        let query = MeteoQuery {
            after: Some(Utc.with_ymd_and_hms(2022, 11, 1, 0, 0, 0).unwrap()),
            before: Some(Utc.with_ymd_and_hms(2022, 11, 3, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            meteo_by_station_id_url(METEO_URL, "PME262", &query),
            "https://edwin-meteo.apps.paas.psnc.pl/meteo/station/PME262\
             ?page=0&size=100&sort=asc&after=2022-11-01T00:00:00Z&before=2022-11-03T00:00:00Z"
        );
    }

    #[test]
    fn meteo_by_station_id_url_without_a_period() {
        assert_eq!(
            meteo_by_station_id_url(METEO_URL, "PME262", &MeteoQuery::default()),
            "https://edwin-meteo.apps.paas.psnc.pl/meteo/station/PME262\
             ?page=0&size=100&sort=asc"
        );
    }

    #[test]
    fn meteo_by_station_id_url_with_only_a_lower_bound() {
        let query = MeteoQuery {
            after: Some(Utc.with_ymd_and_hms(2022, 11, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            meteo_by_station_id_url(METEO_URL, "PME262", &query),
            "https://edwin-meteo.apps.paas.psnc.pl/meteo/station/PME262\
             ?page=0&size=100&sort=asc&after=2022-11-01T00:00:00Z"
        );
    }

    #[test]
    fn meteo_by_coordinates_url_leads_with_the_station_count() {
        let query = MeteoQuery {
            after: Some(Utc.with_ymd_and_hms(2022, 11, 1, 0, 0, 0).unwrap()),
            before: Some(Utc.with_ymd_and_hms(2022, 11, 3, 0, 0, 0).unwrap()),
            size: 50,
            ..Default::default()
        };
        assert_eq!(
            meteo_by_coordinates_url(METEO_URL, 52.0, 21.0, 1, &query),
            "https://edwin-meteo.apps.paas.psnc.pl/meteo/location/52/21\
             ?stationsCount=1&page=0&size=50&sort=asc\
             &after=2022-11-01T00:00:00Z&before=2022-11-03T00:00:00Z"
        );
    }
}
