//! Source implementation for Angers Loire Métropole using the `data.angers.fr` open-data API.

mod category;
mod config;
mod street_type;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use collecte_core::{
    model::{Collection, Sector, SectorId, SourceId, SourceMeta, Sources},
    plugin::SourcePlugin,
    ports::{AddressQuery, Argument, CalendarPort, SectorPort, SourceError},
};

pub use category::Category;
pub use config::AngersConfig;
pub use street_type::StreetType;

const TITLE: &str = "Angers Loire Métropole";
const DESCRIPTION: &str = "Source script for data.angers.fr";
const URL: &str = "https://data.angers.fr/";

/// Envelope of every explore v2.1 `/records` response.
#[derive(Debug, Deserialize)]
struct RecordsResponse<T> {
    results: Vec<T>,
    // total_count and links exist, we only page through `limit`
}

/// Row of the sector dataset, restricted by `select`.
#[derive(Debug, Deserialize)]
struct SectorRecord {
    id_secteur: String,
    cat_secteur: Option<String>,
}

/// Row of the calendar dataset, restricted by `select`.
#[derive(Debug, Deserialize)]
struct CalendarRecord {
    date_collecte: String, // "YYYY-MM-DD"
}

impl TryFrom<SectorRecord> for Sector {
    type Error = SourceError;

    fn try_from(record: SectorRecord) -> Result<Self, Self::Error> {
        let category = record.cat_secteur.ok_or_else(|| {
            SourceError::new(
                Argument::City,
                format!("error response from api: sector {} has no category", record.id_secteur),
            )
        })?;

        Ok(Sector {
            id: SectorId(record.id_secteur),
            category,
        })
    }
}

/// Address to sector resolution for Angers.
pub struct AngersSectorPort {
    client: Client,
    config: AngersConfig,
    meta: SourceMeta,
}

impl AngersSectorPort {
    /// Create a new sector port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client, config: AngersConfig) -> Self {
        Self {
            client,
            config,
            meta: source_meta(),
        }
    }
}

#[async_trait]
impl SectorPort for AngersSectorPort {
    fn source(&self) -> &SourceMeta {
        &self.meta
    }

    async fn sectors(&self, query: &AddressQuery) -> Result<Vec<Sector>, SourceError> {
        // `like "**"` would match every street of the commune
        if query.is_empty() {
            return Err(SourceError::new(Argument::Address, "address must not be empty"));
        }

        let street_type = query
            .street_type
            .as_deref()
            .map(str::parse::<StreetType>)
            .transpose()?;

        let filter = sector_filter(query.address.trim(), street_type);
        let refine = format!("lib_com:{}", quote_literal(&query.city.trim().to_uppercase()));
        let limit = self.config.limit.to_string();

        tracing::debug!(%filter, %refine, "looking up Angers sectors");

        let req = self.client.get(self.config.sector_url()).query(&[
            ("select", "id_secteur,cat_secteur"),
            ("where", filter.as_str()),
            ("limit", limit.as_str()),
            ("refine", refine.as_str()),
        ]);

        let resp = fetch_json::<RecordsResponse<SectorRecord>>(
            req,
            Argument::Address,
            "error response from data.angers.fr sector api",
        )
        .await?;

        if resp.results.is_empty() {
            return Err(SourceError::new(
                Argument::Address,
                "no data from the api, check the address",
            ));
        }

        dedup_sectors(resp.results)
    }
}

/// Per-sector collection calendar for Angers.
pub struct AngersCalendarPort {
    client: Client,
    config: AngersConfig,
    meta: SourceMeta,
}

impl AngersCalendarPort {
    /// Create a new calendar port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client, config: AngersConfig) -> Self {
        Self {
            client,
            config,
            meta: source_meta(),
        }
    }
}

#[async_trait]
impl CalendarPort for AngersCalendarPort {
    fn source(&self) -> &SourceMeta {
        &self.meta
    }

    async fn collections(&self, sector: &Sector) -> Result<Vec<Collection>, SourceError> {
        let category = Category::try_from(sector.category.as_str())?;

        let filter = format!("id_secteur={}", quote_literal(&sector.id.0));
        let limit = self.config.limit.to_string();

        let req = self.client.get(self.config.calendar_url()).query(&[
            ("select", "date_collecte"),
            ("where", filter.as_str()),
            ("limit", limit.as_str()),
        ]);

        let resp = fetch_json::<RecordsResponse<CalendarRecord>>(
            req,
            Argument::City,
            "error fetching collection data",
        )
        .await?;

        tracing::debug!(
            sector = %sector.id.0,
            category = category.code(),
            dates = resp.results.len(),
            "fetched Angers calendar"
        );

        resp.results
            .iter()
            .map(|record| category::collection_from_date(&record.date_collecte, category))
            .collect()
    }
}

/// Build the plugin bundle for the Angers source with the default endpoints.
#[must_use]
pub fn plugin(client: Client) -> SourcePlugin {
    plugin_with_config(client, AngersConfig::default())
}

/// Build the plugin bundle for the Angers source against custom endpoints.
#[must_use]
pub fn plugin_with_config(client: Client, config: AngersConfig) -> SourcePlugin {
    let sector_port = Arc::new(AngersSectorPort::new(client.clone(), config.clone()));
    let calendar_port = Arc::new(AngersCalendarPort::new(client, config));

    SourcePlugin {
        meta: source_meta(),
        sector_port,
        calendar_port,
    }
}

/// Reference addresses known to resolve against the live portal.
#[must_use]
pub fn test_cases() -> Vec<(&'static str, AddressQuery)> {
    vec![
        ("TRELAZE", AddressQuery::new("cerisiers", "TRELAZE", Some("ALLEE"))),
        ("BEAUCOUZE", AddressQuery::new("Montreuil", "BEAUCOUZE", Some("rue"))),
        ("ANGERS", AddressQuery::new("Victor Châtenay", "ANGERS", Some("AVENUE"))),
    ]
}

/// Identifier under which [`plugin`] registers.
#[must_use]
pub fn source_id() -> SourceId {
    SourceId::from(Sources::Angers)
}

fn source_meta() -> SourceMeta {
    SourceMeta {
        id: source_id(),
        title: TITLE.to_owned(),
        description: DESCRIPTION.to_owned(),
        url: URL.to_owned(),
    }
}

/// ODSQL `where` clause matching a street fragment, optionally of one type.
fn sector_filter(address: &str, street_type: Option<StreetType>) -> String {
    let street = format!("libvoie like {}", quote_literal(&format!("*{address}*")));
    match street_type {
        Some(street_type) => format!("typvoie='{street_type}' and {street}"),
        None => street,
    }
}

/// Double-quoted ODSQL string literal.
fn quote_literal(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Collapse identical records, keeping first-seen order.
fn dedup_sectors(records: Vec<SectorRecord>) -> Result<Vec<Sector>, SourceError> {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let mut sectors = Vec::with_capacity(total);

    for record in records {
        let sector = Sector::try_from(record)?;
        if seen.insert(sector.clone()) {
            sectors.push(sector);
        }
    }

    if sectors.len() < total {
        tracing::debug!(
            dropped = total - sectors.len(),
            kept = sectors.len(),
            "dropped duplicate sector records"
        );
    }

    Ok(sectors)
}

// Small helper to fetch and decode JSON, attributing failures to `argument`.
async fn fetch_json<T: DeserializeOwned>(
    req: RequestBuilder,
    argument: Argument,
    context: &str,
) -> Result<T, SourceError> {
    let wrap = |err: ReqwestError| SourceError::with_cause(argument, context, err);

    req.send()
        .await
        .map_err(wrap)?
        .error_for_status()
        .map_err(wrap)?
        .json()
        .await
        .map_err(wrap)
}
