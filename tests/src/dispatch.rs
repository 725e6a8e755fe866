#![cfg(test)]
use std::time::Duration;

use async_trait::async_trait;
use ouilookup_cli::commands::{self, CommandLine, Status};
use ouilookup_cli::terminal::print::Printer;
use ouilookup_common::network::mac::MacAddress;
use ouilookup_common::system::{ArpError, ArpRepository};
use ouilookup_core::arp::{ArpFormat, SystemArp};
use ouilookup_core::resolver::MacLookupApi;

use crate::stub::{StubReply, StubService};

/// Replays a captured `arp -a` listing.
struct CapturedArp(&'static str);

#[async_trait]
impl ArpRepository for CapturedArp {
    async fn read_arp_table(&self) -> Result<Vec<MacAddress>, ArpError> {
        Ok(ArpFormat::Windows.parse(self.0))
    }
}

const CAPTURE: &str = "
Interface: 10.0.0.7 --- 0x4
  Internet Address      Physical Address      Type
  10.0.0.1              aa-bb-cc-00-00-01     dynamic
  10.0.0.9              AA-BB-CC-00-00-09     dynamic
";

async fn run(args: &[&str], service: &StubService, arp: &dyn ArpRepository) -> (Status, String) {
    colored::control::set_override(false);
    let mut argv = vec!["ouilookup", "--endpoint"];
    let base_url = service.base_url();
    argv.push(&base_url);
    argv.extend_from_slice(args);

    let invocation = CommandLine::parse_invocation(argv).expect("valid command line");
    let resolver = MacLookupApi::new(&invocation.config).expect("build resolver");
    let mut printer = Printer::new(Vec::new());
    let status = commands::dispatch(&invocation, &resolver, arp, &mut printer)
        .await
        .expect("write to buffer");
    (status, String::from_utf8(printer.into_inner()).expect("utf-8 output"))
}

fn reported_ms(out: &str) -> u128 {
    out.lines()
        .find_map(|line| line.strip_prefix("Tiempo de respuesta: "))
        .and_then(|rest| rest.strip_suffix(" ms"))
        .and_then(|ms| ms.parse().ok())
        .expect("timing line")
}

#[tokio::test]
async fn single_lookup_against_slow_stub() {
    let reply = StubReply::json(r#"{"company":"Acme"}"#).with_delay(Duration::from_millis(15));
    let service = StubService::start(reply).await;

    let (status, out) = run(&["--mac", "aa:bb:cc:00:00:00"], &service, &CapturedArp("")).await;

    assert_eq!(status, Status::Success);
    assert!(out.contains("aa:bb:cc:00:00:00"), "{out}");
    assert!(out.contains("Acme"), "{out}");
    let ms = reported_ms(&out);
    assert!((15..1_000).contains(&ms), "reported {ms} ms");
}

#[tokio::test]
async fn no_flags_never_reach_the_service() {
    let service = StubService::start(StubReply::json(r#"{"company":"Acme"}"#)).await;

    let (status, out) = run(&[], &service, &CapturedArp(CAPTURE)).await;

    assert_eq!(status.code(), 2);
    assert!(out.starts_with("Uso: "));
    assert!(service.paths().is_empty());
}

#[tokio::test]
async fn arp_table_is_resolved_row_by_row() {
    let service = StubService::start(StubReply::json(r#"{"company":"Acme"}"#)).await;

    let (status, out) = run(&["--arp"], &service, &CapturedArp(CAPTURE)).await;

    assert_eq!(status, Status::Success);
    assert_eq!(
        out,
        "MAC/Fabricante:\naa:bb:cc:00:00:01 / Acme\nAA:BB:CC:00:00:09 / Acme\n"
    );
    assert_eq!(
        service.paths(),
        vec!["/v2/macs/aa:bb:cc:00:00:01", "/v2/macs/AA:BB:CC:00:00:09"]
    );
}

#[tokio::test]
async fn failing_service_does_not_stop_the_arp_loop() {
    let service = StubService::start(StubReply::json("{}").with_status(500)).await;

    let (status, out) = run(&["--arp"], &service, &CapturedArp(CAPTURE)).await;

    assert_eq!(status, Status::Success);
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.contains(" / Error en la solicitud: ")), "{out}");
    assert_eq!(service.paths().len(), 2);
}

#[tokio::test]
async fn empty_capture_exits_one() {
    let service = StubService::start(StubReply::json(r#"{"company":"Acme"}"#)).await;

    let (status, out) = run(&["--arp"], &service, &CapturedArp("No ARP Entries Found.\n")).await;

    assert_eq!(status.code(), 1);
    assert_eq!(out, "No se encontraron direcciones MAC en la tabla ARP.\n");
    assert!(service.paths().is_empty());
}

#[tokio::test]
async fn unsupported_host_reports_platform() {
    let service = StubService::start(StubReply::json(r#"{"company":"Acme"}"#)).await;

    let (status, out) = run(&["--arp"], &service, &SystemArp::with_format(None)).await;

    assert_eq!(status, Status::NoAddresses);
    assert!(out.starts_with("La lectura de la tabla ARP no está soportada en "), "{out}");
    assert!(service.paths().is_empty());
}
