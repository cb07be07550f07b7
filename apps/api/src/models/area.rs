use serde::{Deserialize, Deserializer, Serialize};

/// Wage-survey area metadata for one ZIP (`zip_index.json` values).
///
/// The `area` code participates in the composite wage-index key, so it is
/// stored as a string even when the feed carries it as a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub area: String,
    #[serde(rename = "areaName")]
    pub area_name: String,
    pub city: String,
    #[serde(rename = "stateAb")]
    pub state_ab: String,
    #[serde(default)]
    pub county: Option<String>,
}

impl AreaInfo {
    /// Display line for this area, e.g. `"New York, NY • New York-Newark-Jersey City (Area 35620)"`.
    pub fn location_line(&self) -> String {
        format!(
            "{}, {} • {} (Area {})",
            self.city, self.state_ab, self.area_name, self.area
        )
    }
}

/// Normalizes free-form ZIP input: digits only, truncated to five, left-padded
/// with zeros.
pub fn normalize_zip(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(5).collect();
    format!("{digits:0>5}")
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_info_deserializes_feed_field_names() {
        let json = r#"{
            "area": "35620",
            "areaName": "New York-Newark-Jersey City, NY-NJ-PA",
            "city": "New York",
            "stateAb": "NY",
            "county": "New York County"
        }"#;
        let info: AreaInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.area, "35620");
        assert_eq!(info.state_ab, "NY");
        assert_eq!(info.county.as_deref(), Some("New York County"));
    }

    #[test]
    fn test_area_code_accepts_json_number() {
        let json = r#"{"area": 35620, "areaName": "NYC", "city": "New York", "stateAb": "NY"}"#;
        let info: AreaInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.area, "35620");
        assert_eq!(info.county, None);
    }

    #[test]
    fn test_location_line_format() {
        let info = AreaInfo {
            area: "16980".to_string(),
            area_name: "Chicago-Naperville-Elgin, IL-IN-WI".to_string(),
            city: "Chicago".to_string(),
            state_ab: "IL".to_string(),
            county: None,
        };
        assert_eq!(
            info.location_line(),
            "Chicago, IL • Chicago-Naperville-Elgin, IL-IN-WI (Area 16980)"
        );
    }

    #[test]
    fn test_normalize_zip_strips_and_pads() {
        assert_eq!(normalize_zip("10001"), "10001");
        assert_eq!(normalize_zip("  600 1 3 "), "60013");
        assert_eq!(normalize_zip("123456789"), "12345");
        assert_eq!(normalize_zip("701"), "00701");
        assert_eq!(normalize_zip("abc"), "00000");
        assert_eq!(normalize_zip(""), "00000");
    }
}
