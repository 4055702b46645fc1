//! Tests for the contacts module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "auth_token";

fn client_for(server: &MockServer) -> ContactsApiClient {
    ContactsApiClient::with_url(TOKEN, format!("{}/go/", server.uri())).unwrap()
}

#[test]
fn test_default_api_url() {
    let client = ContactsApiClient::new(TOKEN).unwrap();
    assert_eq!(client.api_url(), "http://go.vumi.org/api/v1/go");
}

#[test]
fn test_custom_api_url_strips_trailing_slash() {
    let client = ContactsApiClient::with_url(TOKEN, "http://example.com/go/").unwrap();
    assert_eq!(client.api_url(), "http://example.com/go");
}

#[tokio::test]
async fn test_get_contact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts/contact-1"))
        .and(header("Authorization", "Bearer auth_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let contact = client_for(&server).get_contact("contact-1").await.unwrap();
    assert_eq!(contact, json!({"foo": "bar"}));
}

#[tokio::test]
async fn test_get_missing_contact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts/foo"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Contact not found."))
        .mount(&server)
        .await;

    let err = client_for(&server).get_contact("foo").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_contact() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/go/contacts"))
        .and(body_json(json!({"msisdn": "+15550001"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "generated",
            "msisdn": "+15550001"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let contact = client_for(&server)
        .create_contact(json!({"msisdn": "+15550001"}))
        .await
        .unwrap();
    assert_eq!(contact["key"], "generated");
}

#[tokio::test]
async fn test_update_and_delete_contact() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/go/contacts/k1"))
        .and(body_json(json!({"name": "Alice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k1", "name": "Alice"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/go/contacts/k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k1", "name": "Alice"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .update_contact("k1", json!({"name": "Alice"}))
        .await
        .unwrap();
    assert_eq!(updated["name"], "Alice");

    let deleted = client.delete_contact("k1").await.unwrap();
    assert_eq!(deleted, json!({"key": "k1", "name": "Alice"}));
}

#[tokio::test]
async fn test_get_contact_from_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts"))
        .and(query_param("query", "msisdn=+1555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"key": "k1", "msisdn": "+1555"}],
            "cursor": null
        })))
        .mount(&server)
        .await;

    let contact = client_for(&server)
        .get_contact_from_field("msisdn", "+1555")
        .await
        .unwrap();
    assert_eq!(contact["key"], "k1");
}

#[tokio::test]
async fn test_get_contact_from_field_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "cursor": null})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_contact_from_field("msisdn", "+1555")
        .await
        .unwrap_err();
    match err {
        Error::Lookup { field, value } => {
            assert_eq!(field, "msisdn");
            assert_eq!(value, "+1555");
        }
        other => panic!("Expected Lookup, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_contact_from_field_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_contact_from_field("msisdn", "+1555")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_contacts_listing_uses_contacts_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"key": "a"}, {"key": "b"}],
            "cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let contacts = client_for(&server)
        .contacts(None)
        .collect_all()
        .await
        .unwrap();
    assert_eq!(contacts, vec![json!({"key": "a"}), json!({"key": "b"})]);
}

#[tokio::test]
async fn test_group_crud() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/go/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "g1", "name": "G"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/go/groups/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "g1", "name": "G"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/go/groups/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "g1", "name": "H"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/go/groups/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "g1", "name": "H"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/go/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"key": "g1"}],
            "cursor": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.create_group(json!({"name": "G"})).await.unwrap()["key"],
        "g1"
    );
    assert_eq!(client.get_group("g1").await.unwrap()["name"], "G");
    assert_eq!(
        client
            .update_group("g1", json!({"name": "H"}))
            .await
            .unwrap()["name"],
        "H"
    );
    assert_eq!(client.delete_group("g1").await.unwrap()["key"], "g1");
    assert_eq!(
        client.groups(None).collect_all().await.unwrap(),
        vec![json!({"key": "g1"})]
    );
}

#[tokio::test]
async fn test_with_client_uses_injected_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/go/contacts/k"))
        .and(header("Authorization", "Bearer injected"))
        .and(header("User-Agent", "custom-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k"})))
        .mount(&server)
        .await;

    let transport = reqwest::Client::builder()
        .user_agent("custom-agent")
        .build()
        .unwrap();
    let client =
        ContactsApiClient::with_client("injected", format!("{}/go", server.uri()), transport)
            .unwrap();

    assert_eq!(client.get_contact("k").await.unwrap()["key"], "k");
}
