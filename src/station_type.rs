use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Weather,
    Rain,
    Unknown,
}

impl StationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Weather => "weather",
            StationType::Rain => "rain",
            StationType::Unknown => "unknown",
        }
    }
}
