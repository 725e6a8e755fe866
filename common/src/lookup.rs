//! # Manufacturer lookup port
//!
//! A lookup either reaches the service and yields a [`Resolved`] value, or fails before a
//! usable answer arrives and yields a [`LookupError`]. Only the first carries a timing.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Shown when the service answered but could not attribute the address to anyone.
pub const NOT_FOUND: &str = "Fabricante no encontrado";

pub type LookupResult = Result<Resolved, LookupError>;

/// Resolves a hardware address to the company that registered its OUI.
#[async_trait]
pub trait ManufacturerLookup: Send + Sync {
    /// Looks up a single address. `mac` is forwarded as given and must not be empty.
    async fn lookup(&self, mac: &str) -> LookupResult;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Manufacturer {
    Known(String),
    /// Invalid address or an OUI missing from the database; the service does not tell them apart.
    Unknown,
}

impl Manufacturer {
    /// Maps the service's `company` field, treating an empty name as unknown.
    pub fn from_company(company: Option<String>) -> Self {
        match company {
            Some(name) if !name.is_empty() => Self::Known(name),
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Unknown => f.write_str(NOT_FOUND),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub manufacturer: Manufacturer,
    pub elapsed: Duration,
}

impl Resolved {
    pub fn new(manufacturer: Manufacturer, elapsed: Duration) -> Self {
        Self { manufacturer, elapsed }
    }

    /// Round trip time truncated to whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure, non-success status or an undecodable body.
    #[error("Error en la solicitud: {message}")]
    Request { message: String },
}

impl LookupError {
    pub fn request(cause: impl fmt::Display) -> Self {
        Self::Request {
            message: cause.to_string(),
        }
    }
}
