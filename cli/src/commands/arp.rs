use std::io::{self, Write};

use indicatif::ProgressBar;
use ouilookup_common::lookup::{LookupResult, ManufacturerLookup};
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::system::{ArpError, ArpRepository};
use tracing::{error, info};

use crate::commands::Status;
use crate::terminal::{print::Printer, spinner};

/// `--arp`: resolve every cached address one after another, one line each.
///
/// Timings are dropped. A failed lookup only affects its own line.
pub async fn arp<W: Write>(
    resolver: &dyn ManufacturerLookup,
    arp_repo: &dyn ArpRepository,
    printer: &mut Printer<W>,
) -> io::Result<Status> {
    let macs: Vec<MacAddress> = match arp_repo.read_arp_table().await {
        Ok(macs) => macs,
        Err(ArpError::UnsupportedPlatform { os }) => {
            printer.unsupported_platform(os)?;
            return Ok(Status::NoAddresses);
        }
        Err(err) => {
            error!("{err}");
            printer.arp_failure(&err)?;
            return Ok(Status::NoAddresses);
        }
    };

    if macs.is_empty() {
        printer.no_addresses()?;
        return Ok(Status::NoAddresses);
    }

    info!("Resolving {} addresses from the ARP table", macs.len());
    printer.arp_header()?;

    let progress: ProgressBar = spinner::arp_progress(macs.len());
    for mac in &macs {
        progress.set_message(mac.to_string());
        let result: LookupResult = resolver.lookup(mac.as_str()).await;
        progress.suspend(|| printer.arp_row(mac, &result))?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(Status::Success)
}
