mod common;

use anyhow::Result;
use reqwest::{header, StatusCode};
use serde_json::json;

const SESSION: &str = "session=integration-test";

#[tokio::test]
async fn normalize_converts_sdk_timestamps() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = common::client()?
        .post(format!("{}/api/protected/documents/normalize", server.base_url))
        .header(header::COOKIE, SESSION)
        .json(&json!({
            "createdAt": { "_seconds": 1700000000, "_nanoseconds": 0 },
            "updatedAt": { "seconds": 1700000000, "nanoseconds": 250000000 },
            "title": "Draft"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        json!({
            "createdAt": "2023-11-14T22:13:20.000Z",
            "updatedAt": "2023-11-14T22:13:20.250Z",
            "title": "Draft"
        })
    );
    Ok(())
}

#[tokio::test]
async fn normalize_null_record_returns_null() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = common::client()?
        .post(format!("{}/api/protected/documents/normalize", server.base_url))
        .header(header::COOKIE, SESSION)
        .json(&serde_json::Value::Null)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"], serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn normalize_rejects_malformed_body() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = common::client()?
        .post(format!("{}/api/protected/documents/normalize", server.base_url))
        .header(header::COOKIE, SESSION)
        .header(header::CONTENT_TYPE, "application/json")
        .body("{ not json")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn insights_report_bands() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = common::client()?
        .post(format!("{}/api/protected/insights", server.base_url))
        .header(header::COOKIE, SESSION)
        .json(&json!({ "readability_score": 64.2, "requests_used": 85, "request_limit": 100 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["readability"]["band"], "standard");
    assert_eq!(body["data"]["usage"]["level"], "approaching");
    assert_eq!(body["data"]["usage"]["remaining"], 15);
    Ok(())
}
