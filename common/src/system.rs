use async_trait::async_trait;
use thiserror::Error;

use crate::network::mac::MacAddress;

/// Access to the local address-resolution cache.
#[async_trait]
pub trait ArpRepository: Send + Sync {
    /// Hardware addresses currently cached, in the order the OS lists them.
    async fn read_arp_table(&self) -> Result<Vec<MacAddress>, ArpError>;
}

#[derive(Debug, Error)]
pub enum ArpError {
    /// No parser exists for this OS's ARP output.
    #[error("reading the ARP table is not supported on {os}")]
    UnsupportedPlatform { os: &'static str },
    #[error("failed to run `{command}`: {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
