use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router as AxumRouter};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{LoginRequest, ShopSummary, TrackingRequest};
use tokio::net::TcpListener;

use super::*;
use crate::core::config::ConsoleConfig;
use crate::core::error::{ConsoleError, MSG_FORBIDDEN, MSG_NETWORK_ERROR, MSG_SERVER_ERROR, MSG_SESSION_EXPIRED};
use crate::core::service::Navigator;
use crate::notifications::NotificationCenter;
use crate::session::{keys, SessionStore};
use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Navigator that only records where it was sent.
#[derive(Default)]
struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths.lock().push(path.to_string());
    }
}

impl RecordingNavigator {
    fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }
}

struct Harness {
    client: ApiClient,
    session: Arc<SessionStore>,
    navigator: Arc<RecordingNavigator>,
    notices: Arc<NotificationCenter>,
}

fn harness_with(base_url: &str, storage: Arc<dyn Storage>, timeout: Duration) -> Harness {
    let mut config = ConsoleConfig::default().with_base_url(base_url).unwrap();
    config.request_timeout = timeout;

    let session = Arc::new(SessionStore::restore(storage));
    let navigator = Arc::new(RecordingNavigator::default());
    let notices = Arc::new(NotificationCenter::new());
    let client = ApiClient::new(&config, session.clone(), navigator.clone(), notices.clone()).unwrap();

    Harness {
        client,
        session,
        navigator,
        notices,
    }
}

fn harness(base_url: &str) -> Harness {
    harness_with(base_url, Arc::new(MemoryStorage::new()), Duration::from_secs(5))
}

/// Serve `routes` under `/api/v1` on an ephemeral port; returns the base URL.
async fn spawn_backend(routes: AxumRouter) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = AxumRouter::new().nest("/api/v1", routes);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({"code": 200, "message": "success", "data": data, "timestamp": 1714552200000_i64}))
}

fn fail(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(json!({"code": status.as_u16(), "message": message})))
}

fn header_value(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    ok(json!({
        "authorization": header_value(&headers, "authorization"),
        "shop": header_value(&headers, "x-shop-id"),
        "requestId": header_value(&headers, "x-request-id"),
    }))
}

#[tokio::test]
async fn test_session_headers_attached() {
    let base = spawn_backend(AxumRouter::new().route("/echo", get(echo_headers))).await;
    let h = harness(&base);
    h.session.set_token("abc");
    h.session.switch_shop(Some(7));

    let echoed: Value = h.client.get("/echo").await.unwrap();

    assert_eq!(echoed["authorization"], "Bearer abc");
    assert_eq!(echoed["shop"], "7");
    assert!(!echoed["requestId"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_headers_omitted_without_session() {
    let base = spawn_backend(AxumRouter::new().route("/echo", get(echo_headers))).await;
    let h = harness(&base);

    let echoed: Value = h.client.get("/echo").await.unwrap();

    assert_eq!(echoed["authorization"], Value::Null);
    assert_eq!(echoed["shop"], Value::Null);
}

#[tokio::test]
async fn test_unauthorized_clears_token_and_redirects_once_per_call() {
    let routes = AxumRouter::new().route("/orders", get(|| async { fail(StatusCode::UNAUTHORIZED, "Token expired") }));
    let base = spawn_backend(routes).await;
    let h = harness(&base);
    h.session.set_token("stale");
    h.session.switch_shop(Some(3));

    let err = order::list(&h.client, &Default::default()).await.unwrap_err();

    assert!(err.is_unauthenticated());
    assert!(h.session.token().is_none());
    assert!(h.session.storage().get(keys::TOKEN).is_none());
    assert!(h.session.storage().get(keys::USERNAME).is_none());
    assert_eq!(h.navigator.paths(), vec!["/login"]);

    let notices = h.notices.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, MSG_SESSION_EXPIRED);

    // A second failing call redirects again, exactly once.
    let _ = order::list(&h.client, &Default::default()).await;
    assert_eq!(h.navigator.paths(), vec!["/login", "/login"]);
}

#[tokio::test]
async fn test_envelope_unauthorized_on_http_ok() {
    let routes = AxumRouter::new().route(
        "/stats/dashboard",
        get(|| async { Json(json!({"code": 401, "message": "Not logged in"})) }),
    );
    let base = spawn_backend(routes).await;
    let h = harness(&base);
    h.session.set_token("stale");

    let err = stats::dashboard(&h.client).await.unwrap_err();

    assert!(err.is_unauthenticated());
    assert!(!h.session.is_logged_in());
    assert_eq!(h.navigator.paths(), vec!["/login"]);
}

#[tokio::test]
async fn test_failure_buckets_and_notices() {
    let routes = AxumRouter::new()
        .route("/forbidden", get(|| async { fail(StatusCode::FORBIDDEN, "Access denied") }))
        .route("/boom", get(|| async { fail(StatusCode::INTERNAL_SERVER_ERROR, "NullPointerException") }))
        .route("/missing", get(|| async { fail(StatusCode::NOT_FOUND, "Shop not found") }))
        .route("/bare", get(|| async { (StatusCode::BAD_REQUEST, "oops") }))
        .route(
            "/soft-error",
            get(|| async { Json(json!({"code": 500, "message": "Database unavailable"})) }),
        );
    let base = spawn_backend(routes).await;
    let h = harness(&base);
    h.session.set_token("valid");

    let forbidden = h.client.get::<Value>("/forbidden").await.unwrap_err();
    let server = h.client.get::<Value>("/boom").await.unwrap_err();
    let missing = h.client.get::<Value>("/missing").await.unwrap_err();
    let bare = h.client.get::<Value>("/bare").await.unwrap_err();
    let soft = h.client.get::<Value>("/soft-error").await.unwrap_err();

    assert!(matches!(forbidden, ConsoleError::Forbidden(_)));
    assert!(matches!(server, ConsoleError::Server(_)));
    assert_eq!(
        missing,
        ConsoleError::Failed {
            code: 404,
            message: "Shop not found".to_string()
        }
    );
    assert!(matches!(bare, ConsoleError::Failed { code: 400, .. }));
    assert!(matches!(soft, ConsoleError::Server(_)));

    let messages: Vec<String> = h.notices.drain().into_iter().map(|n| n.message).collect();
    assert_eq!(
        messages,
        vec![
            MSG_FORBIDDEN.to_string(),
            MSG_SERVER_ERROR.to_string(),
            "Shop not found".to_string(),
            "Request failed".to_string(),
            MSG_SERVER_ERROR.to_string(),
        ]
    );

    // Only a 401 touches the session.
    assert_eq!(h.session.token().as_deref(), Some("valid"));
    assert!(h.navigator.paths().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let h = harness(&format!("http://{}/api/v1", addr));
    let err = stats::dashboard(&h.client).await.unwrap_err();

    assert!(matches!(err, ConsoleError::Network(_)));
    assert_eq!(h.notices.drain()[0].message, MSG_NETWORK_ERROR);
    assert!(h.navigator.paths().is_empty());
}

#[tokio::test]
async fn test_deadline_is_network_error() {
    let routes = AxumRouter::new().route(
        "/stats/dashboard",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            ok(json!({}))
        }),
    );
    let base = spawn_backend(routes).await;
    let h = harness_with(&base, Arc::new(MemoryStorage::new()), Duration::from_millis(200));

    let err = stats::dashboard(&h.client).await.unwrap_err();

    assert!(matches!(err, ConsoleError::Network(_)));
}

#[tokio::test]
async fn test_login_persists_and_survives_reload() {
    let routes = AxumRouter::new().route(
        "/auth/login",
        post(|Json(body): Json<Value>| async move {
            if body["username"] != "alice" || body["password"] != "pa55" {
                return Json(json!({"code": 400, "message": "Wrong username or password"}));
            }
            ok(json!({
                "token": "tok-1",
                "username": "alice",
                "realName": "Alice Zhang",
                "avatar": "https://cdn.example.com/alice.png",
                "expiresIn": 86400000,
                "permissions": ["order:view", "admin"]
            }))
        }),
    );
    let base = spawn_backend(routes).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(&path).unwrap());
    let h = harness_with(&base, storage, Duration::from_secs(5));

    let credentials = LoginRequest {
        username: "alice".to_string(),
        password: "pa55".to_string(),
    };
    let session = h.session.login(&h.client, credentials).await.unwrap();

    assert_eq!(session.token.as_deref(), Some("tok-1"));
    assert_eq!(session.display_name, "Alice Zhang");
    assert_eq!(session.permissions, vec!["order:view", "admin"]);
    assert!(session.is_admin());

    let reloaded = SessionStore::restore(Arc::new(FileStorage::open(&path).unwrap()));
    assert_eq!(reloaded.snapshot(), session);

    h.session.logout();
    let after_logout = FileStorage::open(&path).unwrap();
    assert!(after_logout.keys().is_empty());
}

#[tokio::test]
async fn test_login_rejection_is_propagated() {
    let routes = AxumRouter::new().route(
        "/auth/login",
        post(|| async { Json(json!({"code": 400, "message": "Wrong username or password"})) }),
    );
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    let credentials = LoginRequest {
        username: "alice".to_string(),
        password: "nope".to_string(),
    };
    let err = h.session.login(&h.client, credentials).await.unwrap_err();

    assert_eq!(err.notice(), "Wrong username or password");
    assert!(!h.session.is_logged_in());
}

#[tokio::test]
async fn test_missing_shop_selection_resets_to_none() {
    let routes = AxumRouter::new().route(
        "/user-shops/list",
        get(|| async {
            ok(json!([
                {"id": 1, "shopName": "Alpha", "shopDomain": "alpha.myshopify.com"},
                {"id": 2, "shopName": "Beta", "shopDomain": "beta.myshopify.com"}
            ]))
        }),
    );
    let base = spawn_backend(routes).await;
    let h = harness(&base);
    h.session.set_token("t");
    h.session.switch_shop(Some(42));

    let shops: Vec<ShopSummary> = h.session.load_accessible_shops(&h.client).await.unwrap();

    assert_eq!(shops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(h.session.current_shop_id(), None);
    assert!(h.session.storage().get(keys::CURRENT_SHOP_ID).is_none());
}

#[tokio::test]
async fn test_query_parameters_and_ack() {
    let seen = Arc::new(Mutex::new(None::<String>));
    let recorder = seen.clone();
    let routes = AxumRouter::new().route(
        "/users/{id}/status",
        put(move |Query(params): Query<std::collections::HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock() = params.get("status").cloned();
                ok(json!({"id": 5, "status": 0}))
            }
        }),
    );
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    user::update_status(&h.client, 5, 0).await.unwrap();

    assert_eq!(seen.lock().as_deref(), Some("0"));
}

#[tokio::test]
async fn test_tracking_number_checked_before_sending() {
    let h = harness("http://127.0.0.1:9/api/v1");
    let request = TrackingRequest {
        tracking_number: "ab".to_string(),
        ..Default::default()
    };

    let err = tracking::create(&h.client, &request).await.unwrap_err();

    assert!(matches!(err, ConsoleError::Validation(_)));
    assert!(h.notices.is_empty());
}

#[tokio::test]
async fn test_multipart_upload() {
    let routes = AxumRouter::new().route(
        "/product/import",
        post(|headers: HeaderMap, body: Bytes| async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = String::from_utf8_lossy(&body).to_string();
            let well_formed = content_type.starts_with("multipart/form-data")
                && body.contains("name=\"file\"")
                && body.contains("filename=\"products.csv\"")
                && body.contains("Handle,Title");
            if well_formed {
                ok(json!({"total": 2, "imported": 2, "skipped": 0}))
            } else {
                Json(json!({"code": 400, "message": "bad upload"}))
            }
        }),
    );
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    let file = FileUpload::csv("products.csv", b"Handle,Title\nshirt,Linen shirt\n".to_vec());
    let summary = product::import_csv(&h.client, file).await.unwrap();

    assert_eq!(summary.imported, 2);
}

#[tokio::test]
async fn test_download_returns_raw_bytes() {
    let routes = AxumRouter::new()
        .route(
            "/theme/migration/download/{id}",
            get(|| async { ([(header::CONTENT_TYPE, "application/zip")], vec![0x50_u8, 0x4b, 0x03, 0x04]) }),
        )
        .route(
            "/listing/export/csv",
            post(|| async { Json(json!({"code": 404, "message": "No products to export"})) }),
        );
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    let archive = theme::download_migrated(&h.client, 11).await.unwrap();
    assert_eq!(archive, vec![0x50, 0x4b, 0x03, 0x04]);

    let err = product::export_csv(&h.client, vec![1, 2]).await.unwrap_err();
    assert_eq!(err.notice(), "No products to export");
}

#[tokio::test]
async fn test_org_sync_full_run_and_partial_counts() {
    #[derive(serde::Deserialize)]
    struct Limit {
        limit: u32,
    }

    let routes = AxumRouter::new()
        .route(
            "/dingtalk/sync/full",
            post(|| async { ok(json!({"id": 4, "syncType": "FULL", "status": "SUCCESS", "successCount": 31})) }),
        )
        .route("/dingtalk/sync/users", post(|| async { ok(json!(5)) }))
        .route("/dingtalk/sync/roles", post(|| async { ok(json!(0)) }))
        .route(
            "/dingtalk/sync/logs",
            get(|Query(q): Query<Limit>| async move {
                let logs: Vec<Value> = (0..q.limit)
                    .map(|i| json!({"id": i, "syncType": "FULL", "status": "SUCCESS"}))
                    .collect();
                ok(json!(logs))
            }),
        );
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    let run = org_sync::full_sync(&h.client).await.unwrap();
    assert_eq!((run.sync_type.as_str(), run.success_count), ("FULL", 31));

    assert_eq!(org_sync::sync(&h.client, org_sync::SyncScope::Users).await.unwrap(), 5);
    assert_eq!(org_sync::sync(&h.client, org_sync::SyncScope::Roles).await.unwrap(), 0);

    let logs = org_sync::logs(&h.client, 0).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(org_sync::logs(&h.client, org_sync::DEFAULT_LOG_LIMIT).await.unwrap().len(), 20);
    assert!(h.notices.is_empty());
}

#[tokio::test]
async fn test_shop_validate_and_webhook_registration() {
    let routes = AxumRouter::new()
        .route(
            "/shops/{id}/validate",
            post(|| async { ok(json!({"valid": false, "message": "Access token revoked", "shopId": 7})) }),
        )
        .route(
            "/shops/{id}/webhooks/register",
            post(|| async {
                ok(json!({
                    "shop": "gamma.myshopify.com",
                    "success": ["orders/create", "orders/updated"],
                    "failed": ["disputes/create"],
                    "totalSuccess": 2,
                    "totalFailed": 1
                }))
            }),
        );
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    let check = shop::validate_connection(&h.client, 7).await.unwrap();
    assert!(!check.is_valid());
    assert_eq!(check.message.as_deref(), Some("Access token revoked"));

    let registration = shop::register_webhooks(&h.client, 7).await.unwrap();
    assert_eq!(registration.shop, "gamma.myshopify.com");
    assert_eq!(registration.success.len(), 2);
    assert_eq!(registration.failed, vec!["disputes/create".to_string()]);
    assert_eq!(registration.total_success, 2);
    assert!(h.notices.is_empty());
}

#[tokio::test]
async fn test_roles_in_shop_are_ids() {
    let routes = AxumRouter::new()
        .route("/user-shops/{id}/roles", get(|| async { ok(json!([2, 3])) }))
        .route("/user-shops/{id}/check-access", get(|| async { ok(json!(true)) }));
    let base = spawn_backend(routes).await;
    let h = harness(&base);

    assert_eq!(user_shop::my_roles_in_shop(&h.client, 3).await.unwrap(), vec![2, 3]);
    assert!(user_shop::check_access(&h.client, 3).await.unwrap());
    assert!(h.notices.is_empty());
}
