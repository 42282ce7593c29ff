mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = common::client()?
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["environment"], "development");
    Ok(())
}

#[tokio::test]
async fn landing_page_is_public() -> Result<()> {
    let server = common::ensure_server().await?;

    for cookie in [None, Some("session=abc")] {
        let mut req = common::client()?.get(format!("{}/", server.base_url));
        if let Some(cookie) = cookie {
            req = req.header("cookie", cookie);
        }
        let res = req.send().await?;
        assert_eq!(res.status(), StatusCode::OK, "cookie: {:?}", cookie);

        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["data"]["name"], "WordWise AI");
        assert!(body["data"]["pricing"].as_array().is_some_and(|tiers| !tiers.is_empty()));
    }
    Ok(())
}

#[tokio::test]
async fn unknown_path_is_json_404() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = common::client()?
        .get(format!("{}/no-such-page", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}
