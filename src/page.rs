use crate::Station;
use serde::{Deserialize, Serialize};

/// Pagination envelope returned by the list endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page: PageMetadata,

    pub content: Vec<Station>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_elements: u64,

    pub total_pages: u32,
}
