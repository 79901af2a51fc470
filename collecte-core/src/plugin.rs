//! Registry for all source plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{SourceId, SourceMeta};
use crate::ports::{CalendarPort, SectorPort};

/// Collection of ports implementing a single municipal source.
pub struct SourcePlugin {
    /// Static metadata describing the source.
    pub meta: SourceMeta,
    /// Implementation for resolving addresses into sectors.
    pub sector_port: Arc<dyn SectorPort>,
    /// Implementation for fetching per-sector calendars.
    pub calendar_port: Arc<dyn CalendarPort>,
}

/// Registry that resolves plugins by source identifier.
pub struct PluginRegistry {
    plugins: HashMap<SourceId, SourcePlugin>,
}

impl PluginRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<SourcePlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered sources.
    #[must_use]
    pub fn sources(&self) -> Vec<SourceMeta> {
        self.plugins
            .values()
            .map(|plugin| plugin.meta.clone())
            .collect()
    }

    /// Look up the plugin registered for `source`.
    #[must_use]
    pub fn plugin(&self, source: &SourceId) -> Option<&SourcePlugin> {
        self.plugins.get(source)
    }
}
