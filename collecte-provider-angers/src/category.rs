//! Sector categories and the date normalizer built on their label/icon tables.

use chrono::NaiveDate;
use collecte_core::model::Collection;
use collecte_core::ports::{Argument, SourceError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Category of a collection sector, as coded by `cat_secteur`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `OM`: household waste.
    HouseholdWaste,
    /// `TRI`: sorted recyclables.
    Sorted,
    /// `enc`: bulky items.
    Bulky,
    /// `dv`: green waste.
    GreenWaste,
    /// `verre`: glass.
    Glass,
}

impl Category {
    /// Raw code used by the datasets.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Category::HouseholdWaste => "OM",
            Category::Sorted => "TRI",
            Category::Bulky => "enc",
            Category::GreenWaste => "dv",
            Category::Glass => "verre",
        }
    }

    /// Display label; categories without one are shown by their raw code.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::HouseholdWaste => "Ordures ménagères",
            Category::Sorted => "Tri sélectif",
            Category::Bulky | Category::GreenWaste | Category::Glass => self.code(),
        }
    }

    /// Material Design icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Category::HouseholdWaste => "mdi:trash-can",
            Category::Sorted => "mdi:recycle",
            Category::Bulky => "mdi:truck-remove",
            Category::GreenWaste => "mdi:leaf",
            Category::Glass => "mdi:bottle-wine",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = SourceError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        match code {
            "OM" => Ok(Category::HouseholdWaste),
            "TRI" => Ok(Category::Sorted),
            "enc" => Ok(Category::Bulky),
            "dv" => Ok(Category::GreenWaste),
            "verre" => Ok(Category::Glass),
            other => Err(SourceError::new(
                Argument::City,
                format!("error response from api: unknown sector category {other:?}"),
            )),
        }
    }
}

/// Turn one `date_collecte` value into a labelled collection.
pub(crate) fn collection_from_date(raw: &str, category: Category) -> Result<Collection, SourceError> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|err| {
        SourceError::with_cause(
            Argument::City,
            format!("invalid collection date {raw:?}"),
            err,
        )
    })?;

    Ok(Collection {
        date,
        kind: category.label().to_owned(),
        icon: Some(category.icon().to_owned()),
    })
}
