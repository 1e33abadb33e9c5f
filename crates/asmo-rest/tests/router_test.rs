//! End-to-end tests of the HTTP surface over in-memory stores.

use asmo_config::{AppMetadata, ServerConfig};
use asmo_core::{
    AsmoError, AsmoResult, Catalog, HealthCheck, HealthStatus, NewProject, NewStaffMember,
    Project, RecordId, StaffMember,
};
use asmo_repository::CatalogStore;
use asmo_rest::{create_router, AppState, MetricsEndpoint};
use asmo_service::{CacheInterface, CacheTtl, CachedCatalogService, MemoryCache, RedisCache};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

// ============ Test doubles ============

struct ProjectVecStore {
    rows: Mutex<Vec<Project>>,
    broken: bool,
}

impl ProjectVecStore {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            broken: false,
        }
    }

    fn broken() -> Self {
        Self {
            broken: true,
            ..Self::new()
        }
    }

    fn check(&self) -> AsmoResult<()> {
        if self.broken {
            Err(AsmoError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogStore<Project> for ProjectVecStore {
    async fn find_all(&self) -> AsmoResult<Vec<Project>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }

    async fn find_by_id(&self, id: RecordId) -> AsmoResult<Option<Project>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id.get()).cloned())
    }

    async fn insert(&self, draft: &NewProject) -> AsmoResult<RecordId> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let now = Utc::now();
        rows.push(Project {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            img: draft.img.clone(),
            price: draft.price,
            time_develop: draft.time_develop,
            created_at: now,
            update_at: now,
        });
        RecordId::new(id)
    }
}

#[derive(Default)]
struct StaffVecStore {
    rows: Mutex<Vec<StaffMember>>,
}

#[async_trait]
impl CatalogStore<StaffMember> for StaffVecStore {
    async fn find_all(&self) -> AsmoResult<Vec<StaffMember>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }

    async fn find_by_id(&self, id: RecordId) -> AsmoResult<Option<StaffMember>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|s| s.id == id.get()).cloned())
    }

    async fn insert(&self, draft: &NewStaffMember) -> AsmoResult<RecordId> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let now = Utc::now();
        rows.push(StaffMember {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            img: draft.img.clone(),
            role: draft.role.clone(),
            created_at: now,
            update_at: now,
        });
        RecordId::new(id)
    }
}

struct FixedHealth(HealthStatus);

#[async_trait]
impl HealthCheck for FixedHealth {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        self.0.clone()
    }
}

// ============ Harness ============

struct TestApp {
    database: HealthStatus,
    cache: Arc<dyn CacheInterface>,
    web_store: Arc<dyn CatalogStore<Project>>,
    environment: &'static str,
    server: ServerConfig,
    metrics: Option<MetricsEndpoint>,
}

impl TestApp {
    fn new() -> Self {
        Self {
            database: HealthStatus::Healthy,
            cache: Arc::new(MemoryCache::new()),
            web_store: Arc::new(ProjectVecStore::new()),
            environment: "production",
            server: ServerConfig::default(),
            metrics: None,
        }
    }

    fn router(self) -> Router {
        let ttl = CacheTtl::default();
        let project_service = |catalog: Catalog, store: Arc<dyn CatalogStore<Project>>| {
            Arc::new(CachedCatalogService::<Project>::new(
                catalog,
                store,
                self.cache.clone(),
                ttl,
            ))
        };

        let state = AppState {
            web_projects: project_service(Catalog::WEB_PROJECTS, self.web_store.clone()),
            mobile_projects: project_service(
                Catalog::MOBILE_PROJECTS,
                Arc::new(ProjectVecStore::new()),
            ),
            bot_projects: project_service(
                Catalog::BOT_PROJECTS,
                Arc::new(ProjectVecStore::new()),
            ),
            staff: Arc::new(CachedCatalogService::<StaffMember>::new(
                Catalog::STAFF,
                Arc::new(StaffVecStore::default()),
                self.cache.clone(),
                ttl,
            )),
            database: Arc::new(FixedHealth(self.database.clone())),
            cache: self.cache.clone(),
            app: AppMetadata {
                environment: self.environment.to_string(),
                ..AppMetadata::default()
            },
        };

        create_router(state, &self.server, self.metrics)
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn project_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "A portfolio entry used in router tests",
        "img": "https://cdn.example.com/project.png",
        "price": 1500.0,
        "time_develop": 30
    })
}

// ============ Health ============

#[tokio::test]
async fn test_health_reports_ok_when_database_is_up() {
    let router = TestApp::new().router();

    let (status, body) = send(&router, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["cache"], "connected");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["timestamp"]["server"], "backend");
    assert!(body["timestamp"]["unix"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_health_stays_200_when_database_is_down() {
    let mut app = TestApp::new();
    app.database = HealthStatus::Unhealthy("connection refused".to_string());
    let router = app.router();

    let (status, body) = send(&router, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
    assert!(body["timestamp"].get("db_error").is_none());
}

#[tokio::test]
async fn test_health_exposes_db_error_in_development() {
    let mut app = TestApp::new();
    app.database = HealthStatus::Unhealthy("connection refused".to_string());
    app.environment = "development";
    let router = app.router();

    let (_, body) = send(&router, get("/api/health")).await;

    assert_eq!(body["timestamp"]["db_error"], "connection refused");
}

#[tokio::test]
async fn test_health_reports_degraded_cache_without_degrading_status() {
    let mut app = TestApp::new();
    app.cache = Arc::new(RedisCache::degraded("redis disabled"));
    let router = app.router();

    let (status, body) = send(&router, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["cache"], "degraded");
}

// ============ Project catalogs ============

#[tokio::test]
async fn test_empty_catalog_lists_nothing() {
    let router = TestApp::new().router();

    let (status, body) = send(&router, get("/api/WebApplications")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projects"], json!([]));
    assert_eq!(body["count"], 0);
    assert_eq!(body["cached"], false);
}

#[tokio::test]
async fn test_create_then_list_and_get_bot_project() {
    let router = TestApp::new().router();

    let (status, body) = send(&router, post_json("/api/Bots", &project_body("Support bot"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Bot project created successfully");
    assert_eq!(body["id"], 1);

    let (status, body) = send(&router, get("/api/Bots")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["cached"], false);
    assert_eq!(body["projects"][0]["name"], "Support bot");
    assert_eq!(body["projects"][0]["time_develop"], 30);

    let (_, body) = send(&router, get("/api/Bots")).await;
    assert_eq!(body["cached"], true);

    let (status, body) = send(&router, get("/api/Bots/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert!(body.get("created_at").is_some());
    assert!(body.get("update_at").is_some());
}

#[tokio::test]
async fn test_create_invalidates_cached_listing() {
    let router = TestApp::new().router();

    send(&router, post_json("/api/MobileApplications", &project_body("First app"))).await;
    let (_, body) = send(&router, get("/api/MobileApplications")).await;
    assert_eq!(body["count"], 1);

    send(&router, post_json("/api/MobileApplications", &project_body("Second app"))).await;
    let (_, body) = send(&router, get("/api/MobileApplications")).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["cached"], false);
    assert_eq!(body["projects"][0]["name"], "Second app");
}

#[tokio::test]
async fn test_catalogs_are_isolated() {
    let router = TestApp::new().router();

    send(&router, post_json("/api/WebApplications", &project_body("Landing page"))).await;
    let (_, body) = send(&router, get("/api/Bots")).await;

    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let router = TestApp::new().router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/WebApplications")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let router = TestApp::new().router();
    let body = json!({ "name": "No price here" });

    let (status, body) = send(&router, post_json("/api/WebApplications", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_rule_violations_are_reported_per_field() {
    let router = TestApp::new().router();
    let mut body = project_body("ab");
    body["price"] = json!(-5.0);

    let (status, body) = send(&router, post_json("/api/WebApplications", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"price"));
}

#[tokio::test]
async fn test_invalid_ids_are_bad_request() {
    let router = TestApp::new().router();

    for uri in ["/api/WebApplications/abc", "/api/WebApplications/0", "/api/Staff/-3"] {
        let (status, body) = send(&router, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let router = TestApp::new().router();

    let (status, body) = send(&router, get("/api/Bots/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_routes_are_case_sensitive() {
    let router = TestApp::new().router();

    let (status, _) = send(&router, get("/api/bots")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let mut app = TestApp::new();
    app.web_store = Arc::new(ProjectVecStore::broken());
    let router = app.router();

    let (status, body) = send(&router, get("/api/WebApplications")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_degraded_cache_still_serves_catalogs() {
    let mut app = TestApp::new();
    app.cache = Arc::new(RedisCache::degraded("redis unreachable"));
    let router = app.router();

    let (status, _) = send(&router, post_json("/api/Bots", &project_body("Ops bot"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, first) = send(&router, get("/api/Bots")).await;
    let (_, second) = send(&router, get("/api/Bots")).await;

    assert_eq!(first["count"], 1);
    assert_eq!(second["cached"], false);
}

// ============ Staff ============

#[tokio::test]
async fn test_staff_create_and_list() {
    let router = TestApp::new().router();
    let body = json!({
        "name": "Ada Moreno",
        "description": "Leads the backend platform work",
        "img": "https://cdn.example.com/ada.png",
        "role": "Backend Lead"
    });

    let (status, created) = send(&router, post_json("/api/Staff", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Staff member created successfully");

    let (status, listing) = send(&router, get("/api/Staff")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["staff"][0]["role"], "Backend Lead");
    assert!(listing.get("projects").is_none());
}

// ============ Cross-cutting layers ============

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let router = TestApp::new().router();

    let response = router.clone().oneshot(get("/api/health")).await.unwrap();
    let generated = response.headers().get("x-request-id").unwrap();
    assert!(!generated.is_empty());

    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-42");
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin_with_credentials() {
    let router = TestApp::new().router();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/WebApplications")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_unlisted_origin() {
    let router = TestApp::new().router();
    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_metrics_route_absent_when_disabled() {
    let router = TestApp::new().router();

    let (status, _) = send(&router, get("/metrics")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_route_serves_prometheus_text() {
    let mut app = TestApp::new();
    app.metrics = Some(MetricsEndpoint {
        path: "/metrics".to_string(),
        handle: PrometheusBuilder::new().build_recorder().handle(),
    });
    let router = app.router();

    let response = router.oneshot(get("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let router = TestApp::new().router();

    let (status, body) = send(&router, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/Bots/{id}").is_some());
}
