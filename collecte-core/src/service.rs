//! High-level service facade combining all sources.

use std::sync::Arc;

use crate::model::{Collection, DateRange, Sector, SourceId};
use crate::plugin::{PluginRegistry, SourcePlugin};
use crate::ports::{AddressQuery, Argument, SourceError};

/// Public entry point for resolving addresses and fetching collections.
pub struct CollecteService {
    registry: Arc<PluginRegistry>,
}

impl CollecteService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }

    /// List all available sources and their titles.
    #[must_use]
    pub fn sources(&self) -> Vec<(SourceId, String)> {
        self.registry
            .sources()
            .into_iter()
            .map(|meta| (meta.id, meta.title))
            .collect()
    }

    /// Resolve the sectors serving an address.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the source is unsupported or the lookup fails.
    pub async fn sectors(
        &self,
        source: &SourceId,
        query: &AddressQuery,
    ) -> Result<Vec<Sector>, SourceError> {
        let plugin = self.plugin(source)?;
        plugin.sector_port.sectors(query).await
    }

    /// Fetch every collection for an address.
    ///
    /// Sectors are resolved first, then their calendars are requested one
    /// after the other. Results keep sector order, then backend order.
    ///
    /// # Errors
    ///
    /// Returns the first [`SourceError`] raised by the lookup or any calendar call.
    pub async fn fetch(
        &self,
        source: &SourceId,
        query: &AddressQuery,
    ) -> Result<Vec<Collection>, SourceError> {
        let plugin = self.plugin(source)?;

        let sectors = plugin.sector_port.sectors(query).await.inspect_err(|err| {
            tracing::warn!(%source, error = %err, "sector lookup failed");
        })?;
        tracing::debug!(%source, sectors = sectors.len(), "resolved sectors");

        let mut collections = Vec::new();
        for sector in &sectors {
            let batch = plugin
                .calendar_port
                .collections(sector)
                .await
                .inspect_err(|err| {
                    tracing::warn!(%source, sector = %sector.id.0, error = %err, "calendar fetch failed");
                })?;
            collections.extend(batch);
        }

        tracing::debug!(%source, collections = collections.len(), "fetch complete");
        Ok(collections)
    }

    /// Fetch collections for an address and keep those within `range`.
    ///
    /// # Errors
    ///
    /// Same as [`CollecteService::fetch`].
    pub async fn fetch_between(
        &self,
        source: &SourceId,
        query: &AddressQuery,
        range: DateRange,
    ) -> Result<Vec<Collection>, SourceError> {
        let mut collections = self.fetch(source, query).await?;
        collections.retain(|collection| range.contains(collection.date));
        Ok(collections)
    }

    fn plugin(&self, source: &SourceId) -> Result<&SourcePlugin, SourceError> {
        let plugin = self.registry.plugin(source).ok_or_else(|| {
            SourceError::new(Argument::City, format!("unsupported city: {source}"))
        })?;

        // Both ports must serve the source they are registered under.
        let sector_source = &plugin.sector_port.source().id;
        let calendar_source = &plugin.calendar_port.source().id;
        if sector_source != source || calendar_source != source {
            tracing::warn!(%source, %sector_source, %calendar_source, "plugin ports disagree on source");
            return Err(SourceError::new(
                Argument::City,
                format!("misconfigured source {source}: ports serve {sector_source} and {calendar_source}"),
            ));
        }

        Ok(plugin)
    }
}
