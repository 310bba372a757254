use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use seating_layout::{config::Config, router, AppState};

fn app() -> Router {
    router(AppState::new(Config::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_check() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".into()));
}

#[tokio::test]
async fn row_label_for_index() {
    let (status, body) = get("/api/rows/label?index=702").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"index": 702, "label": "AAA"}));
}

#[tokio::test]
async fn index_for_row_label() {
    let (status, body) = get("/api/rows/index?label=zz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"index": 701, "label": "ZZ"}));
}

#[tokio::test]
async fn invalid_row_label_is_rejected() {
    let (status, body) = get("/api/rows/index?label=A1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_LABEL");

    let (status, body) = get("/api/rows/index?label=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_LABEL");
}

#[tokio::test]
async fn negative_index_is_a_query_error() {
    let (status, body) = get("/api/rows/label?index=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn normalize_empty_layout() {
    let (status, body) = post("/api/layouts/normalize", json!({"blocks": []})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"blocks": [], "canvasWidth": 400.0, "canvasHeight": 400.0}));
}

#[tokio::test]
async fn normalize_keeps_block_order_and_grows_canvas() {
    let (status, body) = post(
        "/api/layouts/normalize",
        json!({"blocks": [
            {"id": "stage", "name": "Stage", "type": "non_sellable", "position": {"x": 0, "y": 0}, "width": 900, "height": 60},
            {"id": "floor", "name": "Floor", "type": "STANDING_CAPACITY", "x": 300, "y": 450, "capacity": 200}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canvasWidth"], 900.0);
    assert_eq!(body["canvasHeight"], 600.0);
    assert_eq!(body["blocks"][0]["id"], "stage");
    assert_eq!(body["blocks"][1]["id"], "floor");
    assert_eq!(body["blocks"][1]["type"], "standing_capacity");
    assert_eq!(body["blocks"][1]["position"], json!({"x": 300.0, "y": 450.0}));
}

#[tokio::test]
async fn normalize_huge_block_returns_numeric_canvas() {
    let (status, body) = post(
        "/api/layouts/normalize",
        json!({"blocks": [{"id": "far", "type": "non_sellable", "x": 1.7e308, "y": 0, "width": 1.0e308}]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["canvasWidth"].is_number());
    assert_eq!(body["canvasWidth"], f64::MAX);
    assert_eq!(body["canvasHeight"], 400.0);
}

#[tokio::test]
async fn unknown_block_type_is_unprocessable() {
    let (status, body) = post("/api/layouts/normalize", json!({"blocks": [{"type": "balcony"}]})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_PAYLOAD");
}

#[tokio::test]
async fn availability_per_block_and_total() {
    let (status, body) = post(
        "/api/layouts/availability",
        json!({
            "tiers": [{"id": "vip", "name": "VIP", "color": "#d4af37"}],
            "blocks": [
                {"id": "pit", "type": "standing_capacity", "seats": [
                    {"id": "p1", "label": "1", "tierId": "vip", "status": "AVAILABLE"},
                    {"id": "p2", "label": "2", "status": "RESERVED"},
                    {"id": "p3", "label": "3"},
                    {"id": "p4", "label": "4"}
                ]},
                {"id": "box", "type": "standing_capacity", "seats": [
                    {"id": "b1", "label": "1", "status": "BOOKED"},
                    {"id": "b2", "label": "2", "status": "sold"}
                ]},
                {"id": "counter", "type": "standing_capacity", "capacity": 1000}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let blocks = body["blocks"].as_array().unwrap();
    assert_eq!(blocks[0]["blockId"], "pit");
    assert_eq!(blocks[0]["percentage"], 75.0);
    assert_eq!(blocks[0]["tierColor"], "#d4af37");
    assert_eq!(blocks[1]["percentage"], 0.0);
    assert_eq!(blocks[1]["tierColor"], Value::Null);
    assert_eq!(blocks[1]["summary"]["bookedSeats"], 2);
    assert_eq!(blocks[2]["percentage"], 100.0);

    assert_eq!(body["summary"]["totalSeats"], 6);
    assert_eq!(body["summary"]["availableSeats"], 3);
    assert_eq!(body["summary"]["percentage"], 50.0);
}

#[tokio::test]
async fn validate_template_rejects_statuses() {
    let layout = json!({"blocks": [
        {"id": "pit", "type": "standing", "seats": [{"id": "p1", "label": "1", "status": "LOCKED"}]}
    ]});

    let (status, _) = post("/api/layouts/validate", layout.clone()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let mut as_template = layout;
    as_template["template"] = json!(true);
    let (status, body) = post("/api/layouts/validate", as_template).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "STATUS_IN_TEMPLATE");
}

#[tokio::test]
async fn validate_rejects_duplicate_seats() {
    let (status, body) = post(
        "/api/layouts/validate",
        json!({"blocks": [
            {"type": "standing", "seats": [{"id": "s1", "label": "1"}]},
            {"type": "standing", "seats": [{"id": "s1", "label": "1"}]}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "DUPLICATE_SEAT");
}

#[tokio::test]
async fn expand_grid_block() {
    let (status, body) = post(
        "/api/blocks/expand",
        json!({"block": {"id": "g1", "name": "Parterre", "type": "seated_grid", "rows": 2, "columns": 3, "startRow": "D"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "g1");
    let rows = body["seatRows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["label"], "D");
    assert_eq!(rows[1]["label"], "E");
    assert_eq!(rows[1]["seats"][2]["label"], "E3");
}

#[tokio::test]
async fn expand_rejects_huge_grid_and_non_grid() {
    let (status, body) = post(
        "/api/blocks/expand",
        json!({"block": {"type": "seated_grid", "rows": 1000, "columns": 1000}}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = post("/api/blocks/expand", json!({"block": {"id": "s", "type": "stage"}})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NOT_SEATED_GRID");
}

#[tokio::test]
async fn block_extent_uses_type_defaults() {
    let (status, body) = post(
        "/api/blocks/extent",
        json!({"block": {"id": "bar", "type": "non_sellable", "position": {"x": 10, "y": 20}}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"blockId": "bar", "x": 10.0, "y": 20.0, "width": 150.0, "height": 100.0}));
}
