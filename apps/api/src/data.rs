//! One-time reference-data load. All three feeds must parse for the service
//! to come up; after that the data is immutable for the process lifetime.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::catalog::RoleCatalog;
use crate::models::area::AreaInfo;
use crate::models::role::Role;
use crate::models::wage::WageThresholds;

pub const ROLES_FILE: &str = "roles.json";
pub const WAGE_INDEX_FILE: &str = "wage_index.json";
pub const ZIP_INDEX_FILE: &str = "zip_index.json";

/// The three reference feeds, loaded once at startup. Handlers receive this
/// behind an `Arc`; a partially loaded state is never observable because the
/// server only binds after `load` returns.
#[derive(Debug)]
pub struct ReferenceData {
    pub catalog: RoleCatalog,
    /// Hourly thresholds keyed `"<area>|<soccode>"`.
    pub wage_index: HashMap<String, WageThresholds>,
    /// Area metadata keyed by 5-digit ZIP.
    pub zip_index: HashMap<String, AreaInfo>,
    pub loaded_at: DateTime<Utc>,
}

impl ReferenceData {
    pub async fn load(data_dir: &Path) -> Result<Self> {
        info!("Loading reference data from {}", data_dir.display());

        let (roles, wage_index, zip_index): (
            Vec<Role>,
            HashMap<String, WageThresholds>,
            HashMap<String, AreaInfo>,
        ) = tokio::try_join!(
            read_json(data_dir.join(ROLES_FILE)),
            read_json(data_dir.join(WAGE_INDEX_FILE)),
            read_json(data_dir.join(ZIP_INDEX_FILE)),
        )?;

        for (key, thresholds) in &wage_index {
            if !thresholds.is_ascending() {
                warn!(
                    "wage thresholds for {key} are not ascending: {:?}",
                    thresholds.as_array()
                );
            }
        }

        info!(
            "Reference data loaded: {} roles, {} wage benchmarks, {} ZIP mappings",
            roles.len(),
            wage_index.len(),
            zip_index.len()
        );

        Ok(Self {
            catalog: RoleCatalog::index(roles),
            wage_index,
            zip_index,
            loaded_at: Utc::now(),
        })
    }

    /// Thresholds for an `(area, soccode)` pair, if the pair is benchmarked.
    pub fn thresholds(&self, area: &str, soc_code: &str) -> Option<&WageThresholds> {
        self.wage_index.get(&format!("{area}|{soc_code}"))
    }

    pub fn area_for_zip(&self, zip: &str) -> Option<&AreaInfo> {
        self.zip_index.get(zip)
    }
}

async fn read_json<T: DeserializeOwned>(path: std::path::PathBuf) -> Result<T> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("failed to parse {}", path.display()))
}
