// merchant-client/tests/bulk_workflow.rs
// End-to-end: NetworkHttpClient against an in-process fake backend

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use merchant_client::bulk::{ActionForm, BulkError, BulkSession, ProductsTarget};
use merchant_client::services::Services;
use merchant_client::{Capabilities, ClientConfig, ClientError, NetworkHttpClient};
use serde_json::{Value, json};
use shared::models::{EntityStatus, InviteRequest, TeamRole};
use shared::{BulkActionType, ErrorCode, ListQuery};

#[derive(Default)]
struct Backend {
    products: Vec<Value>,
    bulk_requests: Vec<Value>,
    undo_requests: Vec<Value>,
    list_calls: usize,
    reject_bulk: bool,
    auth_headers: Vec<String>,
}

type Shared = Arc<Mutex<Backend>>;

fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "code": 0, "message": "OK", "data": data }))
}

fn page(items: Vec<Value>, page: u64, per_page: u64) -> Value {
    let total = items.len() as u64;
    json!({
        "items": items,
        "pagination": {
            "page": page,
            "per_page": per_page,
            "total": total,
            "total_pages": total.div_ceil(per_page.max(1)),
        }
    })
}

async fn list_products(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.list_calls += 1;
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        backend.auth_headers.push(auth.to_string());
    }
    let search = params.get("search").cloned().unwrap_or_default();
    let items: Vec<Value> = backend
        .products
        .iter()
        .filter(|p| p["name"].as_str().unwrap_or("").contains(&search))
        .cloned()
        .collect();
    let page_no = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page = params.get("per_page").and_then(|p| p.parse().ok()).unwrap_or(20);
    envelope(page(items, page_no, per_page))
}

async fn bulk_products(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut backend = state.lock().unwrap();
    backend.bulk_requests.push(body.clone());
    if backend.reject_bulk {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": ErrorCode::BulkActionUnsupported.code(),
                "message": "Archived products cannot change category",
            })),
        );
    }

    let ids: Vec<String> = serde_json::from_value(body["ids"].clone()).unwrap_or_default();
    let mut successful = 0;
    for product in backend.products.iter_mut() {
        let id = product["id"].as_str().unwrap_or_default().to_string();
        if !ids.contains(&id) {
            continue;
        }
        if body["action"] == "change_status" {
            product["status"] = body["params"]["status"].clone();
        }
        successful += 1;
    }
    let failed = ids.len() - successful;
    (
        StatusCode::OK,
        envelope(json!({
            "successful": successful,
            "failed": failed,
            "batch_id": format!("batch-{}", backend.bulk_requests.len()),
        })),
    )
}

async fn undo_products(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.undo_requests.push(body.clone());
    let ids: Vec<String> = serde_json::from_value(body["ids"].clone()).unwrap_or_default();
    for product in backend.products.iter_mut() {
        if ids.iter().any(|id| product["id"] == id.as_str()) {
            product["status"] = json!("active");
        }
    }
    Json(json!({ "code": 0, "message": "OK" }))
}

async fn list_discounts() -> Json<Value> {
    envelope(page(
        vec![json!({
            "id": "d1",
            "title": "Weekend deal",
            "discount_type": "percentage",
            "value": "15",
            "is_active": true,
        })],
        1,
        20,
    ))
}

async fn invite(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::CONFLICT,
            Json(json!({
                "code": ErrorCode::AlreadyMember.code(),
                "message": "Already a team member",
            })),
        );
    }
    (
        StatusCode::OK,
        envelope(json!({
            "id": "inv-1",
            "email": body["email"],
            "role": body["role"],
            "status": "pending",
        })),
    )
}

async fn upload(mut multipart: Multipart) -> Json<Value> {
    let mut name = String::new();
    let mut size = 0;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            name = field.file_name().unwrap_or_default().to_string();
            size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        }
    }
    envelope(json!({ "url": format!("https://cdn.example.com/{}?size={}", name, size) }))
}

fn product(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "price": "10.00", "status": "active" })
}

async fn spawn_backend(products: Vec<Value>) -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(Backend {
        products,
        ..Default::default()
    }));
    let app = Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/bulk", post(bulk_products))
        .route("/api/products/bulk/undo", post(undo_products))
        .route("/api/discounts", get(list_discounts))
        .route("/api/team/invitations", post(invite))
        .route("/api/uploads", post(upload))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), state)
}

fn catalog(n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| product(&format!("p{i}"), &format!("Product {i}")))
        .collect()
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url)
        .with_token("merchant-token")
        .with_search_debounce(0)
}

fn session(base_url: &str) -> BulkSession<ProductsTarget<NetworkHttpClient>> {
    let config = config(base_url);
    let services = Services::new(config.build_http_client().unwrap());
    BulkSession::new(ProductsTarget::new(services.products), &config)
}

#[tokio::test]
async fn test_bulk_status_change_end_to_end() {
    let (url, state) = spawn_backend(catalog(5)).await;
    let mut session = session(&url);

    session.load().await.unwrap();
    assert_eq!(session.items().len(), 5);
    assert_eq!(session.pagination().unwrap().total, 5);

    for id in ["p1", "p2", "p3"] {
        session.toggle(id);
    }
    session
        .prepare(&ActionForm::new(BulkActionType::ChangeStatus).status("inactive"))
        .unwrap();
    let result = session.submit().await.unwrap();

    assert_eq!((result.successful, result.failed), (3, 0));
    assert_eq!(result.batch_id.as_deref(), Some("batch-1"));
    assert!(session.selection().is_empty());
    assert_eq!(session.reload_count(), 2);

    let inactive = session
        .items()
        .iter()
        .filter(|p| p.status == EntityStatus::Inactive)
        .count();
    assert_eq!(inactive, 3);

    let backend = state.lock().unwrap();
    assert_eq!(backend.list_calls, 2);
    let body = &backend.bulk_requests[0];
    assert_eq!(body["action"], "change_status");
    assert_eq!(body["params"]["status"], "inactive");
    assert_eq!(body["ids"], json!(["p1", "p2", "p3"]));
    assert!(backend.auth_headers.iter().all(|h| h == "Bearer merchant-token"));
}

#[tokio::test]
async fn test_empty_selection_sends_no_request() {
    let (url, state) = spawn_backend(catalog(2)).await;
    let mut session = session(&url);
    session.load().await.unwrap();

    session
        .prepare(&ActionForm::new(BulkActionType::Activate))
        .unwrap();
    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, BulkError::EmptySelection));
    assert!(state.lock().unwrap().bulk_requests.is_empty());
}

#[tokio::test]
async fn test_server_rejection_keeps_selection_and_alerts() {
    let (url, state) = spawn_backend(catalog(3)).await;
    state.lock().unwrap().reject_bulk = true;
    let mut session = session(&url);
    session.load().await.unwrap();

    session.select_all(["p1", "p2"]);
    session
        .prepare(&ActionForm::new(BulkActionType::ChangeCategory).category("cat-archived"))
        .unwrap();
    let err = session.submit().await.unwrap_err();

    match err {
        BulkError::Request(ClientError::Api { code, .. }) => {
            assert_eq!(code, ErrorCode::BulkActionUnsupported)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.selection().len(), 2);
    assert!(session.pending().is_some());
    assert_eq!(
        session.alert().map(|a| a.message.as_str()),
        Some("Archived products cannot change category")
    );
    assert_eq!(session.reload_count(), 1);
}

#[tokio::test]
async fn test_undo_restores_and_reloads() {
    let (url, state) = spawn_backend(catalog(3)).await;
    let mut session = session(&url);
    session.load().await.unwrap();

    session.select_all_loaded();
    session
        .prepare(&ActionForm::new(BulkActionType::Deactivate))
        .unwrap();
    session.submit().await.unwrap();
    let entry_id = session.history().latest().unwrap().id;

    session.undo(entry_id).await.unwrap();
    assert!(!session.history().get(entry_id).unwrap().can_undo);
    assert!(
        session
            .items()
            .iter()
            .all(|p| p.status == EntityStatus::Active)
    );

    let backend = state.lock().unwrap();
    let undo = &backend.undo_requests[0];
    assert_eq!(undo["batch_id"], "batch-1");
    assert_eq!(undo["action"], "deactivate");
    assert_eq!(undo["ids"], json!(["p1", "p2", "p3"]));
}

#[tokio::test]
async fn test_search_filters_list() {
    let (url, _state) = spawn_backend(vec![
        product("p1", "Iced latte"),
        product("p2", "Hot latte"),
        product("p3", "Croissant"),
    ])
    .await;
    let mut session = session(&url);

    let ticket = session.search("latte");
    assert!(ticket.settle().await);
    assert!(session.apply_search(&ticket).await.unwrap());
    assert_eq!(session.items().len(), 2);
}

#[tokio::test]
async fn test_services_round_trip() {
    let (url, _state) = spawn_backend(Vec::new()).await;
    let services = Services::new(config(&url).build_http_client().unwrap());

    let discounts = services.discounts.list(&ListQuery::default()).await.unwrap();
    assert_eq!(discounts.items.len(), 1);
    assert_eq!(discounts.items[0].title, "Weekend deal");

    let invitation = services
        .team
        .invite(&InviteRequest {
            email: "new@example.com".into(),
            role: TeamRole::Manager,
        })
        .await
        .unwrap();
    assert_eq!(invitation.email, "new@example.com");
    assert_eq!(invitation.role, TeamRole::Manager);

    let err = services
        .team
        .invite(&InviteRequest {
            email: "taken@example.com".into(),
            role: TeamRole::Staff,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::AlreadyMember));
    assert_eq!(err.server_message(), Some("Already a team member"));
}

#[tokio::test]
async fn test_upload_from_path() {
    let (url, _state) = spawn_backend(Vec::new()).await;
    let services = Services::new(config(&url).build_http_client().unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banner.png");
    std::fs::write(&path, [0u8; 64]).unwrap();

    let media = services.uploads.upload_path(&path).await.unwrap();
    assert_eq!(media.url, "https://cdn.example.com/banner.png?size=64");
    assert!(media.thumbnail_url.is_none());
}
