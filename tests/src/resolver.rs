#![cfg(test)]
use std::time::Duration;

use ouilookup_common::config::Config;
use ouilookup_common::lookup::{LookupResult, Manufacturer, ManufacturerLookup, NOT_FOUND};
use ouilookup_core::resolver::MacLookupApi;

use crate::stub::{self, StubReply, StubService};

fn api(base_url: String) -> MacLookupApi {
    MacLookupApi::new(&Config { api_url: base_url }).expect("build resolver")
}

async fn lookup_against(reply: StubReply, mac: &str) -> (LookupResult, Vec<String>) {
    let service = StubService::start(reply).await;
    let result = api(service.base_url()).lookup(mac).await;
    (result, service.paths())
}

#[tokio::test]
async fn company_is_reported_with_timing() {
    let reply = StubReply::json(r#"{"success":true,"found":true,"macPrefix":"AABBCC","company":"Acme","country":"CL"}"#);
    let (result, _) = lookup_against(reply, "aa:bb:cc:00:00:00").await;

    let resolved = result.expect("lookup should succeed");
    assert_eq!(resolved.manufacturer, Manufacturer::Known("Acme".into()));
    assert!(resolved.elapsed_ms() < 5_000);
}

#[tokio::test]
async fn address_is_sent_verbatim() {
    let (_, paths) = lookup_against(StubReply::json(r#"{"company":"Acme"}"#), "AA:bb:CC:00:00:00").await;
    assert_eq!(paths, vec!["/v2/macs/AA:bb:CC:00:00:00"]);
}

#[tokio::test]
async fn missing_company_is_not_found() {
    let reply = StubReply::json(r#"{"success":true,"found":false,"macPrefix":"","company":""}"#);
    let (result, _) = lookup_against(reply, "00:00:00:00:00:00").await;

    let resolved = result.expect("service answered");
    assert_eq!(resolved.manufacturer, Manufacturer::Unknown);
    assert_eq!(resolved.manufacturer.to_string(), NOT_FOUND);
}

#[tokio::test]
async fn absent_company_field_is_not_found() {
    let (result, _) = lookup_against(StubReply::json("{}"), "zz").await;
    assert_eq!(result.expect("service answered").manufacturer, Manufacturer::Unknown);
}

#[tokio::test]
async fn error_status_is_a_failed_lookup() {
    let reply = StubReply::json(r#"{"success":false,"error":"Unsupported MAC format"}"#).with_status(400);
    let (result, _) = lookup_against(reply, "not-a-mac").await;

    let err = result.expect_err("400 must not resolve");
    let message = err.to_string();
    assert!(message.starts_with("Error en la solicitud: "), "{message}");
    assert!(message.contains("400"), "{message}");
}

#[tokio::test]
async fn undecodable_body_is_a_failed_lookup() {
    let (result, _) = lookup_against(StubReply::json("<html>oops</html>"), "aa:bb:cc:00:00:00").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn refused_connection_is_a_failed_lookup() {
    let result = api(stub::closed_base_url().await).lookup("aa:bb:cc:00:00:00").await;
    let err = result.expect_err("nothing is listening");
    assert!(err.to_string().starts_with("Error en la solicitud: "));
}

#[tokio::test]
async fn timing_covers_the_round_trip() {
    let reply = StubReply::json(r#"{"company":"Acme"}"#).with_delay(Duration::from_millis(50));
    let (result, _) = lookup_against(reply, "aa:bb:cc:00:00:00").await;
    assert!(result.expect("lookup should succeed").elapsed_ms() >= 50);
}
