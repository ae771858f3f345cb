use edwin_meteo::{Error, Gateway, StationType};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // The production endpoint presents a certificate that does not pass
    // verification, so the gateway is created with verification disabled.
    let gateway = Gateway::new(true)?;

    gateway
        .download_stations_of_type(StationType::Unknown, "data/stations")
        .await
}
