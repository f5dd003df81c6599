// SPDX-License-Identifier: MIT

//! Tests for the generic CRUD layer: list, get, create, update, delete,
//! page-based pagination and lazy iteration.

use futures_util::TryStreamExt;
use serde_json::{json, Map, Value};
use teamleader::{Error, ListOptions};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::client_against;

fn contact_json(id: &str, first_name: &str) -> Value {
    json!({"id": id, "first_name": first_name, "last_name": "Doe"})
}

fn list_response(ids: &[&str], matches: u64) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| contact_json(id, "Jane")).collect();
    json!({"data": data, "meta": {"matches": matches}})
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_builds_page_body_and_wraps_response() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    Mock::given(method("POST"))
        .and(path("/contacts.list"))
        .and(body_json(json!({"page": {"size": 20, "number": 1}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_response(&["c1", "c2"], 55)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client.contacts().list(ListOptions::new()).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, "c1");
    assert_eq!(page.data[0].full_name(), "Jane Doe");
    // total across ALL pages, not the current page's length.
    assert_eq!(page.total_count, 55);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.page_size, 20);
}

#[tokio::test]
async fn test_list_merges_filters_into_body() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    Mock::given(method("POST"))
        .and(path("/contacts.list"))
        .and(body_json(json!({
            "page": {"size": 10, "number": 2},
            "filter": {"email": "jane@example.com"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response(&[], 0)))
        .expect(1)
        .mount(&server)
        .await;

    let opts = ListOptions::new()
        .page(2)
        .page_size(10)
        .filter("filter", json!({"email": "jane@example.com"}));
    client.contacts().list(opts).await.unwrap();
}

#[tokio::test]
async fn test_list_empty_result_set() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    Mock::given(method("POST"))
        .and(path("/contacts.list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response(&[], 0)))
        .mount(&server)
        .await;

    let page = client.contacts().list(ListOptions::new()).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total_count, 0);
    assert!(!page.has_next());
}

// ---------------------------------------------------------------------------
// get / create / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_posts_id_to_info() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    Mock::given(method("POST"))
        .and(path("/contacts.info"))
        .and(body_json(json!({"id": "c42"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": contact_json("c42", "Jane")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let contact = client.contacts().get("c42").await.unwrap();
    assert_eq!(contact.id, "c42");
}

#[tokio::test]
async fn test_create_refetches_full_object() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    // add returns only a minimal {type, id} reference…
    Mock::given(method("POST"))
        .and(path("/contacts.add"))
        .and(body_json(json!({"first_name": "Jane", "last_name": "Doe"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "contact", "id": "new-id"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    // …so create must immediately re-fetch via info with that id.
    Mock::given(method("POST"))
        .and(path("/contacts.info"))
        .and(body_json(json!({"id": "new-id"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": contact_json("new-id", "Jane")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut fields = Map::new();
    fields.insert("first_name".to_string(), json!("Jane"));
    fields.insert("last_name".to_string(), json!("Doe"));
    let contact = client.contacts().create(fields).await.unwrap();

    assert_eq!(contact.id, "new-id");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_posts_then_refetches() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    // The API answers update with an empty body on success.
    Mock::given(method("POST"))
        .and(path("/contacts.update"))
        .and(body_json(json!({"id": "c42", "first_name": "Janet"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/contacts.info"))
        .and(body_json(json!({"id": "c42"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": contact_json("c42", "Janet")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut fields = Map::new();
    fields.insert("first_name".to_string(), json!("Janet"));
    let contact = client.contacts().update("c42", fields).await.unwrap();
    assert_eq!(contact.first_name, "Janet");
}

#[tokio::test]
async fn test_delete_posts_id() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    Mock::given(method("POST"))
        .and(path("/contacts.delete"))
        .and(body_json(json!({"id": "c42"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.contacts().delete("c42").await.unwrap();
}

#[tokio::test]
async fn test_delete_propagates_typed_error() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    Mock::given(method("POST"))
        .and(path("/contacts.delete"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.contacts().delete("gone").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Page.has_next / Page.next
// ---------------------------------------------------------------------------

async fn mount_page(server: &MockServer, number: u32, ids: &[&str], matches: u64) {
    Mock::given(method("POST"))
        .and(path("/contacts.list"))
        .and(body_json(json!({"page": {"size": 20, "number": number}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response(ids, matches)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_has_next_over_55_items_at_size_20() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    mount_page(&server, 1, &["a"], 55).await;
    mount_page(&server, 2, &["b"], 55).await;
    mount_page(&server, 3, &["c"], 55).await;

    let contacts = client.contacts();
    let page1 = contacts.list(ListOptions::new()).await.unwrap();
    assert!(page1.has_next());

    let page2 = page1.next().await.unwrap();
    assert_eq!(page2.current_page, 2);
    assert!(page2.has_next());

    // 3 * 20 = 60 >= 55: last page.
    let page3 = page2.next().await.unwrap();
    assert_eq!(page3.current_page, 3);
    assert!(!page3.has_next());
}

#[tokio::test]
async fn test_next_on_last_page_fails_without_network() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    mount_page(&server, 1, &["a", "b", "c", "d", "e"], 5).await;

    let contacts = client.contacts();
    let page = contacts.list(ListOptions::new()).await.unwrap();
    assert!(!page.has_next());

    let requests_before = server.received_requests().await.unwrap().len();
    let err = page.next().await.unwrap_err();
    match err {
        Error::NoMorePages {
            page: p,
            page_size,
            total_count,
        } => {
            assert_eq!((p, page_size, total_count), (1, 20, 5));
        }
        other => panic!("got {other:?}"),
    }
    assert_eq!(
        server.received_requests().await.unwrap().len(),
        requests_before
    );
}

#[tokio::test]
async fn test_next_forwards_captured_filters() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    let filter = json!({"company_id": "co-1"});
    Mock::given(method("POST"))
        .and(path("/contacts.list"))
        .and(body_json(json!({
            "page": {"size": 20, "number": 1},
            "filter": filter,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response(&["a"], 30)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/contacts.list"))
        .and(body_json(json!({
            "page": {"size": 20, "number": 2},
            "filter": filter,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_response(&["b"], 30)))
        .expect(1)
        .mount(&server)
        .await;

    let contacts = client.contacts();
    let page1 = contacts
        .list(ListOptions::new().filter("filter", filter.clone()))
        .await
        .unwrap();
    let page2 = page1.next().await.unwrap();
    assert_eq!(page2.current_page, 2);
}

// ---------------------------------------------------------------------------
// iterate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_iterate_55_items_makes_exactly_3_list_calls() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    let ids: Vec<String> = (1..=55).map(|i| format!("c{i}")).collect();
    let page1: Vec<&str> = ids[0..20].iter().map(String::as_str).collect();
    let page2: Vec<&str> = ids[20..40].iter().map(String::as_str).collect();
    let page3: Vec<&str> = ids[40..55].iter().map(String::as_str).collect();

    mount_page(&server, 1, &page1, 55).await;
    mount_page(&server, 2, &page2, 55).await;
    mount_page(&server, 3, &page3, 55).await;

    let contacts = client.contacts();
    let stream = contacts.iterate(20, Map::new());
    let items: Vec<_> = std::pin::pin!(stream).try_collect().await.unwrap();

    assert_eq!(items.len(), 55);
    let yielded: Vec<&str> = items.iter().map(|c| c.id.as_str()).collect();
    let expected: Vec<&str> = ids.iter().map(String::as_str).collect();
    assert_eq!(yielded, expected);
    // No 4th request past the final page.
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_iterate_single_page() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    mount_page(&server, 1, &["a", "b"], 2).await;

    let contacts = client.contacts();
    let stream = contacts.iterate(20, Map::new());
    let items: Vec<_> = std::pin::pin!(stream).try_collect().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_iterate_empty_result() {
    let server = MockServer::start().await;
    let client = client_against(&server).await;

    mount_page(&server, 1, &[], 0).await;

    let contacts = client.contacts();
    let stream = contacts.iterate(20, Map::new());
    let items: Vec<_> = std::pin::pin!(stream).try_collect().await.unwrap();
    assert!(items.is_empty());
}
