use crate::{json, url, Error, Gateway, Page, StationQuery, StationType};
use log::info;
use std::path::Path;

impl Gateway {
    /// Downloads every page of the active station listing into `data_dir`,
    /// one file per page, named `active stations page_{page}.json`.
    ///
    /// `data_dir` must already exist; nothing is created or cleaned up, and
    /// existing files are overwritten.
    pub async fn download_all_stations(&self, data_dir: impl AsRef<Path>) -> Result<(), Error> {
        let data_dir = data_dir.as_ref();
        let listing_url = url::stations_url(&self.stations_url, &StationQuery::default());
        let pages = self.page_count(&listing_url).await?;

        // Inclusive bound: the page just past the last index is requested
        // too and comes back with an empty content array.
        for page in 0..=pages {
            let query = StationQuery {
                page,
                ..Default::default()
            };
            let page_url = url::stations_url(&self.stations_url, &query);
            let data: serde_json::Value = self.get(&page_url).await?;
            let filename = format!("active stations page_{}.json", page);
            json::save_file(data_dir.join(filename), &data).await?;
            info!("Saved station page {} of {}.", page, pages);
        }

        Ok(())
    }

    /// Downloads the full detail record of every station of one type, one
    /// file per station, into `data_dir/{type}/{id}.json`.
    ///
    /// The type subdirectory must already exist. Every listed station is
    /// fetched again by id, so the saved record is the complete one rather
    /// than the listing row. Existing files are overwritten.
    pub async fn download_stations_of_type(
        &self,
        station_type: StationType,
        data_dir: impl AsRef<Path>,
    ) -> Result<(), Error> {
        let data_dir = data_dir.as_ref().join(station_type.as_str());
        let listing_query = StationQuery {
            station_type: Some(station_type),
            ..Default::default()
        };
        let listing_url = url::stations_url(&self.stations_url, &listing_query);
        let pages = self.page_count(&listing_url).await?;

        // Same inclusive bound as the full listing download.
        for page in 0..=pages {
            let query = StationQuery {
                station_type: Some(station_type),
                page,
                ..Default::default()
            };
            let page_url = url::stations_url(&self.stations_url, &query);
            let listing: Page = self.get(&page_url).await?;

            for station in listing.content {
                let detail_url = url::station_by_id_url(&self.stations_url, &station.id);
                let detail: serde_json::Value = self.get(&detail_url).await?;
                json::save_file(data_dir.join(format!("{}.json", station.id)), &detail).await?;
                info!("Saved {} station {}.", station_type.as_str(), station.id);
            }

            info!("Finished station page {} of {}.", page, pages);
        }

        Ok(())
    }
}
