//! # ARP table reader
//!
//! Each [`ArpFormat`] variant knows which command lists the cache on its platform and how to
//! pull hardware addresses out of that command's text output.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace};

use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::system::{ArpError, ArpRepository};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArpFormat {
    /// `arp -a` on Windows: `<ip> <aa-bb-cc-dd-ee-ff> <type>` rows grouped under
    /// `Interface:` headers.
    Windows,
}

impl ArpFormat {
    /// The format produced by the running OS, if one is supported.
    pub fn host() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else {
            None
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            Self::Windows => "arp",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["-a"],
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program())
            .chain(self.args().iter().copied())
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Extracts the hardware address of a single table row.
    pub fn parse_line(&self, line: &str) -> Option<MacAddress> {
        match self {
            Self::Windows => line
                .split_whitespace()
                .nth(1)
                .and_then(MacAddress::from_hyphenated),
        }
    }

    /// Every address in `output`, in listing order. Headers and blank lines are skipped.
    pub fn parse(&self, output: &str) -> Vec<MacAddress> {
        output
            .lines()
            .filter_map(|line| {
                let mac = self.parse_line(line);
                if mac.is_none() {
                    trace!("Skipping ARP line {line:?}");
                }
                mac
            })
            .collect()
    }
}

/// Reads the ARP cache by running the platform's listing command.
pub struct SystemArp {
    format: Option<ArpFormat>,
}

impl SystemArp {
    pub fn new() -> Self {
        Self {
            format: ArpFormat::host(),
        }
    }

    pub fn with_format(format: Option<ArpFormat>) -> Self {
        Self { format }
    }
}

impl Default for SystemArp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArpRepository for SystemArp {
    async fn read_arp_table(&self) -> Result<Vec<MacAddress>, ArpError> {
        let format: ArpFormat = self.format.ok_or(ArpError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })?;
        let command_line: String = format.command_line();
        debug!("Running `{command_line}`");

        let output = Command::new(format.program())
            .args(format.args())
            .output()
            .await
            .map_err(|source| ArpError::Command {
                command: command_line.clone(),
                source,
            })?;

        // `arp -a` exits non-zero when the cache is empty; the output is still authoritative.
        if !output.status.success() {
            debug!("`{command_line}` exited with {}", output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let macs: Vec<MacAddress> = format.parse(&stdout);
        debug!("Parsed {} addresses from the ARP table", macs.len());
        Ok(macs)
    }
}
