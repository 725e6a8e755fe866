use std::error::Error as _;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use ouilookup_common::config::Config;
use ouilookup_common::lookup::{
    LookupError, LookupResult, Manufacturer, ManufacturerLookup, Resolved,
};

const USER_AGENT: &str = concat!("ouilookup/", env!("CARGO_PKG_VERSION"));

/// Subset of the maclookup.app v2 response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MacRecord {
    company: Option<String>,
    mac_prefix: Option<String>,
    country: Option<String>,
    found: Option<bool>,
}

/// Resolves manufacturers through the maclookup.app HTTP API, one GET per address.
pub struct MacLookupApi {
    client: Client,
    api_url: String,
}

impl MacLookupApi {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()?;
        Ok(Self {
            client,
            api_url: cfg.api_url.clone(),
        })
    }

    /// The address is appended as given, without escaping.
    pub fn url_for(&self, mac: &str) -> String {
        format!("{}{}", self.api_url, mac)
    }

    async fn fetch(&self, url: &str) -> Result<MacRecord, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<MacRecord>()
            .await
    }
}

#[async_trait]
impl ManufacturerLookup for MacLookupApi {
    async fn lookup(&self, mac: &str) -> LookupResult {
        let url: String = self.url_for(mac);
        debug!("GET {url}");

        let start: Instant = Instant::now();
        let record: MacRecord = self.fetch(&url).await.map_err(|err| {
            let message: String = with_causes(&err);
            warn!("Lookup for {mac} failed: {message}");
            LookupError::request(message)
        })?;
        let elapsed = start.elapsed();

        debug!(
            "{mac}: found={:?} prefix={:?} country={:?} in {}ms",
            record.found,
            record.mac_prefix,
            record.country,
            elapsed.as_millis()
        );

        Ok(Resolved::new(Manufacturer::from_company(record.company), elapsed))
    }
}

// reqwest keeps the interesting part (refused, dns, ...) in the source chain.
fn with_causes(err: &reqwest::Error) -> String {
    let mut message: String = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
