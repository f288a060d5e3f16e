use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
};
use fanfei_portal::{
    client::{ApiClient, ApiError},
    config::AppConfig,
    models::{AdminRole, LoginRequest, Product},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

// The only token the stub backend accepts.
const VALID_TOKEN: &str = "test-token";

/// Shared state for the stateful stub backend.
#[derive(Clone)]
struct StubState {
    products: Arc<Mutex<Vec<Product>>>,
    protected_hits: Arc<AtomicUsize>,
}

type StubError = (StatusCode, Json<serde_json::Value>);

fn require_bearer(headers: &HeaderMap) -> Result<(), StubError> {
    let presented = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok());
    if presented == Some(&format!("Bearer {VALID_TOKEN}")) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"detail": "无效凭证"})),
        ))
    }
}

async fn login(
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, StubError> {
    if body.username == "admin" && body.password == "secret" {
        Ok(Json(serde_json::json!({
            "access_token": VALID_TOKEN,
            "token_type": "bearer",
            "username": "admin",
            "role": "super_admin"
        })))
    } else {
        Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"detail": "用户名或密码错误"})),
        ))
    }
}

async fn list_products(State(state): State<StubState>) -> Json<Vec<Product>> {
    Json(state.products.lock().unwrap().clone())
}

async fn create_product(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(product): Json<Product>,
) -> Result<Json<serde_json::Value>, StubError> {
    state.protected_hits.fetch_add(1, Ordering::SeqCst);
    require_bearer(&headers)?;
    state.products.lock().unwrap().push(product);
    Ok(Json(serde_json::json!({"status": "success"})))
}

async fn update_product(
    State(state): State<StubState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(product): Json<Product>,
) -> Result<Json<serde_json::Value>, StubError> {
    state.protected_hits.fetch_add(1, Ordering::SeqCst);
    require_bearer(&headers)?;
    let mut products = state.products.lock().unwrap();
    match products.iter_mut().find(|existing| existing.id == id) {
        Some(existing) => {
            *existing = product;
            Ok(Json(serde_json::json!({"status": "success"})))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": "Product not found"})),
        )),
    }
}

async fn delete_product(
    State(state): State<StubState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, StubError> {
    state.protected_hits.fetch_add(1, Ordering::SeqCst);
    require_bearer(&headers)?;
    state.products.lock().unwrap().retain(|product| product.id != id);
    Ok(Json(serde_json::json!({"status": "success"})))
}

async fn list_users(headers: HeaderMap) -> Result<Json<serde_json::Value>, StubError> {
    require_bearer(&headers)?;
    Ok(Json(serde_json::json!([
        {"id": "u1", "username": "admin", "role": "super_admin"},
        {"id": "u2", "username": "editor", "role": "content_operator"}
    ])))
}

async fn list_partner_applications(
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, StubError> {
    require_bearer(&headers)?;
    Ok(Json(serde_json::json!([
        {"name": "张三", "phone": "13800000000", "company": "低空科技",
         "target_city": "深圳", "message": ""}
    ])))
}

async fn spawn_backend(seed: Vec<Product>) -> (String, StubState) {
    let state = StubState {
        products: Arc::new(Mutex::new(seed)),
        protected_hits: Arc::new(AtomicUsize::new(0)),
    };

    let router = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/users", get(list_users))
        .route("/api/products/", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            put(update_product).delete(delete_product),
        )
        .route("/api/partners/applications", get(list_partner_applications))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

fn signed_in_client(origin: String, token: &str) -> ApiClient {
    use fanfei_portal::session::{MemorySessionStore, Session, SessionState};

    let config = AppConfig {
        api_origin: origin,
        ..AppConfig::default()
    };
    let session: SessionState = Arc::new(MemorySessionStore::signed_in(Session {
        access_token: token.to_string(),
        token_type: "bearer".to_string(),
        username: "admin".to_string(),
        role: AdminRole::SuperAdmin,
    }));
    ApiClient::with_session(&config, session)
}

fn anonymous_admin_client(origin: String) -> ApiClient {
    use fanfei_portal::session::{MemorySessionStore, SessionState};

    let config = AppConfig {
        api_origin: origin,
        ..AppConfig::default()
    };
    let session: SessionState = Arc::new(MemorySessionStore::new());
    ApiClient::with_session(&config, session)
}

fn product(id: &str, name: &str, sort_order: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: "云端管理平台".to_string(),
        description: String::new(),
        image: String::new(),
        video: None,
        sort_order,
    }
}

#[tokio::test]
async fn test_login_success_and_session_establish() {
    use fanfei_portal::session::{self, MemorySessionStore, SessionStore};

    let (origin, _state) = spawn_backend(vec![]).await;
    let client = anonymous_admin_client(origin);

    let response = client
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login must succeed");
    assert_eq!(response.access_token, VALID_TOKEN);
    assert_eq!(response.role, AdminRole::SuperAdmin);

    let store = MemorySessionStore::new();
    let session = session::establish(&store, &response);
    assert_eq!(session.username, "admin");
    assert_eq!(store.load(), Some(session));
}

#[tokio::test]
async fn test_login_bad_credentials_surfaces_backend_detail() {
    let (origin, _state) = spawn_backend(vec![]).await;
    let client = anonymous_admin_client(origin);

    let error = client
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("bad credentials must fail");
    assert_eq!(error.status(), Some(400));
    assert!(error.to_string().contains("用户名或密码错误"));
}

#[tokio::test]
async fn test_create_returns_refreshed_list() {
    let (origin, _state) = spawn_backend(vec![product("p1", "低空大脑", 0)]).await;
    let client = signed_in_client(origin, VALID_TOKEN);

    let refreshed = client
        .manage::<Product>()
        .create(&product("p2", "翔翼", 10))
        .await
        .expect("create must succeed");

    let ids: Vec<&str> = refreshed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
}

#[tokio::test]
async fn test_update_and_delete_refresh_the_collection() {
    let seed = vec![product("p1", "低空大脑", 0), product("p2", "翔翼", 10)];
    let (origin, _state) = spawn_backend(seed).await;
    let client = signed_in_client(origin, VALID_TOKEN);
    let manager = client.manage::<Product>();

    let mut edited = product("p1", "低空大脑 Pro", 0);
    edited.description = "升级版云端管理平台".to_string();
    let after_update = manager.update("p1", &edited).await.expect("update must succeed");
    assert_eq!(after_update[0].name, "低空大脑 Pro");

    let after_delete = manager.delete("p2").await.expect("delete must succeed");
    assert_eq!(after_delete.len(), 1);
    assert_eq!(after_delete[0].id, "p1");
}

#[tokio::test]
async fn test_stale_token_surfaces_401_with_detail() {
    let (origin, _state) = spawn_backend(vec![]).await;
    let client = signed_in_client(origin, "expired-token");

    let error = client
        .manage::<Product>()
        .create(&product("p1", "低空大脑", 0))
        .await
        .expect_err("stale token must be rejected");
    assert_eq!(error.status(), Some(401));
    let message = error.to_string();
    assert!(message.contains("401"), "{message}");
    assert!(message.contains("无效凭证"), "{message}");
}

#[tokio::test]
async fn test_no_session_fails_before_any_request() {
    let (origin, state) = spawn_backend(vec![]).await;
    let client = anonymous_admin_client(origin);

    let error = client
        .manage::<Product>()
        .create(&product("p1", "低空大脑", 0))
        .await
        .expect_err("no session must fail");
    assert!(matches!(error, ApiError::NotAuthenticated));
    assert_eq!(
        state.protected_hits.load(Ordering::SeqCst),
        0,
        "no protected request may reach the backend without a session"
    );
}

#[tokio::test]
async fn test_admin_user_listing() {
    let (origin, _state) = spawn_backend(vec![]).await;
    let client = signed_in_client(origin, VALID_TOKEN);

    let users = client.users().await.expect("user listing must succeed");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role, AdminRole::SuperAdmin);
    assert_eq!(users[1].role, AdminRole::ContentOperator);
}

#[tokio::test]
async fn test_partner_application_listing_is_bearer_protected() {
    let (origin, _state) = spawn_backend(vec![]).await;

    let signed_in = signed_in_client(origin.clone(), VALID_TOKEN);
    let applications = signed_in
        .partner_applications()
        .await
        .expect("listing must succeed with a session");
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].target_city, "深圳");

    let anonymous = anonymous_admin_client(origin);
    let error = anonymous
        .partner_applications()
        .await
        .expect_err("listing must fail without a session");
    assert!(matches!(error, ApiError::NotAuthenticated));
}
