mod download_stations;
mod error;
pub use error::Error;
mod get_meteo;
mod get_station_count;
mod get_stations;
pub mod json;
mod page;
pub use page::{Page, PageMetadata};
mod query;
pub use query::{LocationQuery, MeteoQuery, StationQuery};
mod sort_order;
pub use sort_order::SortOrder;
mod station;
pub use station::Station;
mod station_type;
pub use station_type::StationType;
pub mod url;

use serde::de::DeserializeOwned;

pub const STATIONS_URL: &str = "https://edwin-meteo.apps.paas.psnc.pl/observationStation";
pub const METEO_URL: &str = "https://edwin-meteo.apps.paas.psnc.pl/meteo";

pub struct Gateway {
    client: reqwest::Client,
    stations_url: String,
    meteo_url: String,
}

impl Gateway {
    /// Creates a gateway against the production endpoints.
    ///
    /// With `insecure_skip_verify` set, certificate validation and hostname
    /// verification are both disabled and the gateway will talk to
    /// endpoints with self-signed or mismatched certificates.
    pub fn new(insecure_skip_verify: bool) -> Result<Gateway, Error> {
        Gateway::with_base_urls(STATIONS_URL, METEO_URL, insecure_skip_verify)
    }

    /// Creates a gateway against custom station and measurement base URLs.
    pub fn with_base_urls(
        stations_url: &str,
        meteo_url: &str,
        insecure_skip_verify: bool,
    ) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = match reqwest::ClientBuilder::new()
            .default_headers(headers)
            .danger_accept_invalid_certs(insecure_skip_verify)
            .danger_accept_invalid_hostnames(insecure_skip_verify)
            .build()
        {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err.to_string()
                )))
            }
        };

        Ok(Gateway {
            client,
            stations_url: stations_url.to_string(),
            meteo_url: meteo_url.to_string(),
        })
    }

    /// Opens `url` and returns the live response for incremental reads.
    pub async fn open(&self, url: &str) -> Result<reqwest::Response, Error> {
        log::debug!("GET {}", url);

        let res = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err.to_string()
                )))
            }
        };

        let status = res.status().as_u16();
        if status < 200 || status > 299 {
            let text = res
                .text()
                .await
                .unwrap_or_else(|_| String::from("Could not retrieve body text."));
            return Err(Error::ApiError(status, text));
        }

        Ok(res)
    }

    /// Opens `url` and reads the whole body into a byte buffer.
    pub async fn read(&self, url: &str) -> Result<Vec<u8>, Error> {
        let res = self.open(url).await?;
        match res.bytes().await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(err) => Err(Error::NetworkError(format!(
                "Could not read response body ({}).",
                err.to_string()
            ))),
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let bytes = self.read(url).await?;

        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(body),
            Err(err) => Err(Error::SerializationError(format!(
                "Could not deserialize response from \"{}\" ({}).",
                url,
                err.to_string()
            ))),
        }
    }
}
