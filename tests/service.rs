use std::collections::HashMap;
use std::sync::Arc;

use kv_httpd::{MemoryStore, Service, Store};
use reqwest::StatusCode;

struct TestServer {
    service: Service,
    base_url: String,
}

async fn start_server(store: Arc<MemoryStore>) -> anyhow::Result<TestServer> {
    let mut service = Service::new("127.0.0.1:0", store);
    service.start().await?;
    let addr = service
        .addr()
        .ok_or_else(|| anyhow::anyhow!("service has no bound address"))?;
    let base_url = format!("http://{}", addr);
    Ok(TestServer { service, base_url })
}

async fn get_key(client: &reqwest::Client, base_url: &str, key: &str) -> anyhow::Result<String> {
    let res = client.get(format!("{}/key/{}", base_url, key)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(res.text().await?)
}

#[tokio::test]
async fn serves_key_operations_over_http() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut server = start_server(store.clone()).await?;
    let client = reqwest::Client::new();

    // Never-assigned key reads back empty
    assert_eq!(get_key(&client, &server.base_url, "k1").await?, r#"{"k1":""}"#);

    let res = client
        .post(format!("{}/key", server.base_url))
        .json(&HashMap::from([("k1", "v1")]))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await?.is_empty());
    assert_eq!(get_key(&client, &server.base_url, "k1").await?, r#"{"k1":"v1"}"#);

    // Written behind the service's back
    store.set("k2", "v2").await?;
    assert_eq!(get_key(&client, &server.base_url, "k2").await?, r#"{"k2":"v2"}"#);

    for _ in 0..2 {
        let res = client
            .delete(format!("{}/key/k2", server.base_url))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }
    assert_eq!(get_key(&client, &server.base_url, "k2").await?, r#"{"k2":""}"#);

    server.service.close().await?;
    Ok(())
}

#[tokio::test]
async fn rejects_malformed_requests() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut server = start_server(store.clone()).await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/key", server.base_url))
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);

    let res = client
        .put(format!("{}/key/k1", server.base_url))
        .body("v1")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = client.get(format!("{}/other", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Earlier failures do not affect later requests
    assert_eq!(get_key(&client, &server.base_url, "k1").await?, r#"{"k1":""}"#);

    server.service.close().await?;
    Ok(())
}

#[tokio::test]
async fn handles_concurrent_requests() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut server = start_server(store.clone()).await?;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let client = client.clone();
        let base_url = server.base_url.clone();
        tasks.push(tokio::spawn(async move {
            let key = format!("key-{}", i);
            let value = format!("value-{}", i);
            let res = client
                .post(format!("{}/key", base_url))
                .json(&HashMap::from([(key.as_str(), value.as_str())]))
                .send()
                .await?;
            anyhow::ensure!(res.status() == StatusCode::OK, "POST failed: {}", res.status());
            let body = get_key(&client, &base_url, &key).await?;
            anyhow::ensure!(body == format!(r#"{{"{}":"{}"}}"#, key, value), "unexpected body {}", body);
            Ok::<(), anyhow::Error>(())
        }));
    }

    for task in tasks {
        task.await??;
    }
    assert_eq!(store.len().await, 32);

    server.service.close().await?;
    Ok(())
}
