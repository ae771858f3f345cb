use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A station record as returned by the list endpoints. Only the identifier
/// is interpreted; every other field rides along untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Station {
    pub id: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
