//! Traits describing source capabilities and shared helper types.

use std::fmt;

use async_trait::async_trait;
use chrono::ParseError as ChronoParseError;
use reqwest::Error as ReqwestError;

use crate::model::{Collection, Sector, SourceMeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// User-supplied argument an error is attributed to.
pub enum Argument {
    /// Street fragment of the address.
    Address,
    /// City name.
    City,
    /// Street type (voie) token.
    StreetType,
}

impl Argument {
    /// Parameter name as the host knows it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Argument::Address => "address",
            Argument::City => "city",
            Argument::StreetType => "typevoie",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug)]
/// Lower-level failure wrapped by a [`SourceError`].
pub enum Cause {
    /// Network layer failed, or the backend answered with a non-success status.
    #[error("network error: {0}")]
    Network(#[from] ReqwestError),
    /// Failed to parse a date from the backend response.
    #[error("parse error: {0}")]
    Parse(#[from] ChronoParseError),
}

#[derive(thiserror::Error, Debug)]
#[error("{argument}: {message}")]
/// Error raised by a source, attributed to the argument the user should check.
///
/// Every failure of a fetch is reported through this one type: transport
/// errors and malformed payloads are wrapped as its [`Cause`].
pub struct SourceError {
    /// Offending argument.
    pub argument: Argument,
    /// Human-readable explanation.
    pub message: String,
    /// Wrapped lower-level error, if any.
    #[source]
    pub cause: Option<Cause>,
}

impl SourceError {
    /// Build an error without an underlying cause.
    #[must_use]
    pub fn new<M: Into<String>>(argument: Argument, message: M) -> Self {
        Self {
            argument,
            message: message.into(),
            cause: None,
        }
    }

    /// Build an error wrapping a lower-level failure.
    #[must_use]
    pub fn with_cause<M: Into<String>, C: Into<Cause>>(
        argument: Argument,
        message: M,
        cause: C,
    ) -> Self {
        Self {
            argument,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }
}

#[derive(Debug, Clone)]
/// Address as entered by the user.
pub struct AddressQuery {
    /// Street name, or any fragment of it.
    pub address: String,
    /// City name.
    pub city: String,
    /// Optional street type token such as `RUE` or `allee`.
    pub street_type: Option<String>,
}

impl AddressQuery {
    /// Construct a new query.
    #[must_use]
    pub fn new<A: Into<String>, C: Into<String>, T: Into<String>>(
        address: A,
        city: C,
        street_type: Option<T>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            street_type: street_type.map(Into::into),
        }
    }

    /// Check if the street fragment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.trim().is_empty()
    }
}

#[async_trait]
/// Trait for source-specific address to sector resolution.
pub trait SectorPort: Send + Sync {
    /// Metadata describing the source handled by this port.
    fn source(&self) -> &SourceMeta;

    /// Resolve an address into the distinct sectors serving it.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the backend request fails or no sector matches.
    async fn sectors(&self, query: &AddressQuery) -> Result<Vec<Sector>, SourceError>;
}

#[async_trait]
/// Trait for source-specific collection calendars.
pub trait CalendarPort: Send + Sync {
    /// Metadata describing the source handled by this port.
    fn source(&self) -> &SourceMeta;

    /// Fetch the collections scheduled for one sector.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the backend request fails or the sector is unknown.
    async fn collections(&self, sector: &Sector) -> Result<Vec<Collection>, SourceError>;
}
