use serde::{Deserialize, Serialize};

/// One row of the occupation catalog feed (`roles.json`).
///
/// Field names follow the feed (`soccode`, `Title`). SOC codes are opaque and
/// not guaranteed unique in the source data; the title is the matching key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "soccode")]
    pub soc_code: String,
    #[serde(rename = "Title")]
    pub title: String,
}
