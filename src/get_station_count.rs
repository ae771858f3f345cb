use crate::{url, Error, Gateway, Page, StationQuery, StationType};

impl Gateway {
    /// Number of active stations known to the API.
    pub async fn active_station_count(&self) -> Result<u64, Error> {
        let url = url::stations_url(&self.stations_url, &StationQuery::default());
        let page: Page = self.get(&url).await?;
        Ok(page.page.total_elements)
    }

    /// Number of active stations of the given type.
    pub async fn active_station_count_by_type(
        &self,
        station_type: StationType,
    ) -> Result<u64, Error> {
        let query = StationQuery {
            station_type: Some(station_type),
            ..Default::default()
        };
        let url = url::stations_url(&self.stations_url, &query);
        let page: Page = self.get(&url).await?;
        Ok(page.page.total_elements)
    }

    /// Number of pages behind an arbitrary list URL.
    pub async fn page_count(&self, url: &str) -> Result<u32, Error> {
        let page: Page = self.get(url).await?;
        Ok(page.page.total_pages)
    }
}
