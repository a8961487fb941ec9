//! Concurrent requests against one server.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::json;
use tokio::task::JoinSet;

use shopcart_integration_tests::TestServer;

const TASKS: u64 = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_share_one_cart() {
    let server = Arc::new(TestServer::start().await);
    let token = Arc::new(server.signup("alice").await);

    let mut tasks = JoinSet::new();
    for item_id in 1..=TASKS {
        let server = Arc::clone(&server);
        let token = Arc::clone(&token);
        tasks.spawn(async move {
            server
                .call(Method::POST, "/carts", Some(&token), Some(json!({ "itemId": item_id })))
                .await
        });
    }

    let mut cart_ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        cart_ids.insert(body["cartId"].as_u64().unwrap());
    }
    assert_eq!(cart_ids.len(), 1);

    let (_, cart) = server.call(Method::GET, "/carts", Some(&token), None).await;
    let lines = cart["items"].as_array().unwrap();
    assert_eq!(lines.len(), usize::try_from(TASKS).unwrap());

    let line_ids: HashSet<u64> = lines.iter().map(|l| l["id"].as_u64().unwrap()).collect();
    assert_eq!(line_ids.len(), lines.len());
    let item_ids: HashSet<u64> = lines.iter().map(|l| l["itemId"].as_u64().unwrap()).collect();
    assert_eq!(item_ids, (1..=TASKS).collect());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_of_one_name() {
    let server = Arc::new(TestServer::start().await);

    let mut tasks = JoinSet::new();
    for i in 0..8 {
        let server = Arc::clone(&server);
        tasks.spawn(async move { server.register("alice", &format!("pw{i}")).await.0 });
    }

    let mut created = 0;
    let mut conflicts = 0;
    while let Some(status) = tasks.join_next().await {
        match status.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!((created, conflicts), (1, 7));
    assert_eq!(server.store.users().list().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_get_distinct_ids() {
    let server = Arc::new(TestServer::start().await);
    let token = Arc::new(server.signup("alice").await);
    for item_id in 1..=3 {
        server
            .call(Method::POST, "/carts", Some(&token), Some(json!({ "itemId": item_id })))
            .await;
    }

    let mut tasks = JoinSet::new();
    for _ in 0..10 {
        let server = Arc::clone(&server);
        let token = Arc::clone(&token);
        tasks.spawn(async move {
            server
                .call(Method::POST, "/orders", Some(&token), Some(json!({ "cartId": 1 })))
                .await
        });
    }

    let mut order_ids = HashSet::new();
    let mut line_ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let (status, order) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        order_ids.insert(order["id"].as_u64().unwrap());
        let lines = order["orderItems"].as_array().unwrap();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line["orderId"], order["id"]);
            line_ids.insert(line["id"].as_u64().unwrap());
        }
    }
    assert_eq!(order_ids.len(), 10);
    assert_eq!(line_ids.len(), 30);
}
