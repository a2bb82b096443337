//! ERP customer directory HTTP contract tests.

use fieldops_search::config::ErpConfig;
use fieldops_search::error::AppError;
use fieldops_search::sources::{CustomerDirectory, ErpCustomerClient};
use mockito::Matcher;

fn client_for(server: &mockito::ServerGuard) -> ErpCustomerClient {
    ErpCustomerClient::new(&ErpConfig {
        base_url: server.url(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_search_sends_query_and_parses_erp_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/customers")
        .match_query(Matcher::UrlEncoded("search".into(), "acme".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"customers":[
                {"CardCode":"C001","CardName":"Acme Facilities","Street":"12 Harbor Rd","City":"Portsmouth"},
                {"CardCode":"C002","CardName":"Acme Marine"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let customers = client.search_customers("acme", None).await.unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].code, "C001");
    assert_eq!(customers[0].name, "Acme Facilities");
    assert_eq!(customers[0].city, "Portsmouth");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_limit_parameter_is_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/customers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "acme".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"customers":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let customers = client.search_customers("acme", Some(10)).await.unwrap();

    assert!(customers.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_customers_field_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let customers = client.search_customers("acme", None).await.unwrap();

    assert!(customers.is_empty());
}

#[tokio::test]
async fn test_http_error_status_maps_to_network_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.search_customers("acme", None).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
}

#[tokio::test]
async fn test_malformed_payload_maps_to_serialization_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/customers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.search_customers("acme", None).await.unwrap_err();

    assert!(matches!(err, AppError::Serialization(_)));
}
