#![allow(dead_code)]

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Four ascending hourly wage thresholds for one `(area, soccode)` pair
/// (`wage_index.json` values).
///
/// The feed sometimes carries rates as numeric strings, so deserialization
/// coerces both forms. Ascending order is an external-data assumption, not an
/// enforced invariant; the loader logs violations and keeps the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WageThresholds([f64; 4]);

impl WageThresholds {
    pub fn new(levels: [f64; 4]) -> Self {
        Self(levels)
    }

    pub fn l1(&self) -> f64 {
        self.0[0]
    }

    pub fn l2(&self) -> f64 {
        self.0[1]
    }

    pub fn l3(&self) -> f64 {
        self.0[2]
    }

    pub fn l4(&self) -> f64 {
        self.0[3]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }

    pub fn is_ascending(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<'de> Deserialize<'de> for WageThresholds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRate {
            Num(f64),
            Text(String),
        }

        let raw: Vec<RawRate> = Vec::deserialize(deserializer)?;
        if raw.len() != 4 {
            return Err(de::Error::custom(format!(
                "expected 4 wage levels, got {}",
                raw.len()
            )));
        }

        let mut levels = [0.0_f64; 4];
        for (i, rate) in raw.into_iter().enumerate() {
            levels[i] = match rate {
                RawRate::Num(n) => n,
                RawRate::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                    de::Error::custom(format!("wage level {} is not numeric: {s:?}", i + 1))
                })?,
            };
        }
        Ok(Self(levels))
    }
}
