use crate::{url, Error, Gateway, LocationQuery, Page, StationQuery};

impl Gateway {
    /// Lists stations matching `query`, one page at a time.
    pub async fn get_stations(&self, query: &StationQuery) -> Result<Page, Error> {
        let url = url::stations_url(&self.stations_url, query);
        self.get(&url).await
    }

    /// Fetches the full detail record of a single station.
    pub async fn get_station_by_id(&self, id: &str) -> Result<serde_json::Value, Error> {
        let url = url::station_by_id_url(&self.stations_url, id);
        self.get(&url).await
    }

    /// Lists stations around a coordinate, closest first.
    pub async fn get_stations_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        query: &LocationQuery,
    ) -> Result<Page, Error> {
        let url = url::stations_by_coordinates_url(&self.stations_url, latitude, longitude, query);
        self.get(&url).await
    }
}
