use crate::{url, Error, Gateway, MeteoQuery};

impl Gateway {
    /// Fetches measurements recorded by a single station.
    pub async fn get_meteo_by_station_id(
        &self,
        id: &str,
        query: &MeteoQuery,
    ) -> Result<serde_json::Value, Error> {
        let url = url::meteo_by_station_id_url(&self.meteo_url, id, query);
        self.get(&url).await
    }

    /// Fetches measurements from the `stations_count` stations closest to a
    /// coordinate.
    pub async fn get_meteo_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        stations_count: u32,
        query: &MeteoQuery,
    ) -> Result<serde_json::Value, Error> {
        let url = url::meteo_by_coordinates_url(
            &self.meteo_url,
            latitude,
            longitude,
            stations_count,
            query,
        );
        self.get(&url).await
    }
}
