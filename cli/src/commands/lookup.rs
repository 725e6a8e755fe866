use std::io::{self, Write};

use ouilookup_common::lookup::{LookupResult, ManufacturerLookup};

use crate::terminal::print::Printer;

/// `--mac`: resolve one address and print the full report. Failures are reported inline.
pub async fn lookup<W: Write>(
    mac: &str,
    resolver: &dyn ManufacturerLookup,
    printer: &mut Printer<W>,
) -> io::Result<()> {
    let result: LookupResult = resolver.lookup(mac).await;
    printer.lookup_report(mac, &result)
}
