use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum Error {
    Unspecified(String),
    SerializationError(String),
    NetworkError(String),
    IoError(String),
    ApiError(u16, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Error::Unspecified(g) => g,
            Error::SerializationError(g) => g,
            Error::NetworkError(g) => g,
            Error::IoError(g) => g,
            Error::ApiError(_, g) => g,
        };
        write!(f, "{}", text)
    }
}
