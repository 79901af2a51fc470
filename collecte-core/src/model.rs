//! Domain data structures for sources, sectors, and collection events.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Built-in sources shipped with the workspace.
pub enum Sources {
    /// Angers Loire Métropole, France.
    Angers,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a source known to collecte.
pub struct SourceId(pub String);

impl fmt::Display for Sources {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Sources::Angers => "data_angers_fr",
        };
        write!(formatter, "{slug}")
    }
}

impl From<Sources> for SourceId {
    fn from(source: Sources) -> Self {
        SourceId(source.to_string())
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a source, as shown by the host.
pub struct SourceMeta {
    /// Unique identifier.
    pub id: SourceId,
    /// Human-friendly title, usually the name of the collecting authority.
    pub title: String,
    /// One-line description of the backing service.
    pub description: String,
    /// Home page of the backing service.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier of a collection zone as issued by the backing API.
pub struct SectorId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Collection zone an address belongs to.
pub struct Sector {
    /// Zone identifier used when requesting calendars.
    pub id: SectorId,
    /// Raw category code of the zone, e.g. `OM` or `TRI`.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Scheduled collection for a specific day.
pub struct Collection {
    /// Date of the collection.
    pub date: NaiveDate,
    /// Display label of the collected waste type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional Material Design icon, e.g. `mdi:recycle`.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// Inclusive start/end range for filtering collections.
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` falls inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).expect("valid test date")
    }

    #[test]
    fn builtin_source_slug() {
        let id = SourceId::from(Sources::Angers);
        assert_eq!(id.0, "data_angers_fr", "slug should match the source module");
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange {
            start: day(2024, 5, 1),
            end: day(2024, 5, 31),
        };

        assert!(range.contains(day(2024, 5, 1)), "start is inside");
        assert!(range.contains(day(2024, 5, 31)), "end is inside");
        assert!(!range.contains(day(2024, 4, 30)), "day before start is outside");
        assert!(!range.contains(day(2024, 6, 1)), "day after end is outside");
    }
}
