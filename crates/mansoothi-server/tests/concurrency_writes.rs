mod common;

use axum::http::StatusCode;
use common::{get, post_json, send_json, setup_app};
use serde_json::json;
use std::collections::HashMap;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_analytics_posts_each_persist_once() {
    let app = setup_app();
    let writers = 16;

    let mut handles = Vec::new();
    for i in 0..writers {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            send_json(
                &router,
                post_json("/analytics", json!({ "page": format!("/page/{i}") })),
            )
            .await
        }));
    }

    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let (_, events) = send_json(&app.router, get("/admin/analytics")).await;
    let mut seen: HashMap<String, usize> = HashMap::new();
    for event in events.as_array().unwrap() {
        *seen
            .entry(event["page"].as_str().unwrap().to_string())
            .or_default() += 1;
    }

    assert_eq!(seen.len(), writers);
    for i in 0..writers {
        assert_eq!(seen.get(&format!("/page/{i}")), Some(&1), "page {i}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_of_one_email_admit_exactly_one() {
    let app = setup_app();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            send_json(
                &router,
                post_json(
                    "/register",
                    json!({ "email": "race@example.com", "password": "pw" }),
                ),
            )
            .await
        }));
    }

    let mut ok = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap().0 {
            StatusCode::OK => ok += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(rejected, 3);
}
