use crate::Error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Decodes a raw byte buffer into a JSON structure.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    match serde_json::from_slice(bytes) {
        Ok(data) => Ok(data),
        Err(err) => Err(Error::SerializationError(format!(
            "Could not deserialize data ({}).",
            err.to_string()
        ))),
    }
}

/// Reads a file and decodes its contents.
pub async fn read_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let path = path.as_ref();
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return Err(Error::IoError(format!(
                "Could not read \"{}\" ({}).",
                path.display(),
                err.to_string()
            )))
        }
    };
    from_slice(&bytes)
}

/// Serializes `data` into a newly created (or overwritten) file.
pub async fn save_file<T: Serialize>(path: impl AsRef<Path>, data: &T) -> Result<(), Error> {
    let path = path.as_ref();
    let text = match serde_json::to_string(data) {
        Ok(text) => text,
        Err(err) => {
            return Err(Error::SerializationError(format!(
                "Could not serialize data for \"{}\" ({}).",
                path.display(),
                err.to_string()
            )))
        }
    };
    match tokio::fs::write(path, text).await {
        Ok(()) => Ok(()),
        Err(err) => Err(Error::IoError(format!(
            "Could not write \"{}\" ({}).",
            path.display(),
            err.to_string()
        ))),
    }
}
