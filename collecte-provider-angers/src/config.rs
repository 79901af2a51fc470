//! Endpoint configuration for the `data.angers.fr` datasets.

use serde::Deserialize;

const BASE_URL: &str = "https://data.angers.fr";
const SECTOR_DATASET: &str = "secteurs-de-collecte-tri-et-plus";
const CALENDAR_DATASET: &str = "calendrier-tri-et-plus";
const RECORD_LIMIT: u32 = 20;

/// Where and how to query the Angers open-data portal.
///
/// Every field falls back to its default when missing from the host's
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AngersConfig {
    /// Portal root, without the `/api/...` path.
    pub base_url: String,
    /// Dataset mapping streets to collection sectors.
    pub sector_dataset: String,
    /// Dataset listing collection dates per sector.
    pub calendar_dataset: String,
    /// Maximum number of records requested per call.
    pub limit: u32,
}

impl Default for AngersConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            sector_dataset: SECTOR_DATASET.to_owned(),
            calendar_dataset: CALENDAR_DATASET.to_owned(),
            limit: RECORD_LIMIT,
        }
    }
}

impl AngersConfig {
    /// Default configuration pointed at another portal root, e.g. a mock server.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn records_url(&self, dataset: &str) -> String {
        format!(
            "{}/api/explore/v2.1/catalog/datasets/{dataset}/records",
            self.base_url.trim_end_matches('/')
        )
    }

    pub(crate) fn sector_url(&self) -> String {
        self.records_url(&self.sector_dataset)
    }

    pub(crate) fn calendar_url(&self) -> String {
        self.records_url(&self.calendar_dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: AngersConfig =
            serde_json::from_value(serde_json::json!({ "limit": 50 })).expect("valid config");

        assert_eq!(config.limit, 50, "explicit value wins");
        assert_eq!(config.base_url, "https://data.angers.fr", "default portal");
        assert_eq!(config.sector_dataset, "secteurs-de-collecte-tri-et-plus", "default dataset");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let config = AngersConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.calendar_url(),
            "http://127.0.0.1:8080/api/explore/v2.1/catalog/datasets/calendrier-tri-et-plus/records",
            "no double slash"
        );
    }
}
