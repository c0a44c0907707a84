//! Drives the real reqwest client against a local axum stub oracle.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::routing::post;
use chrono::NaiveDate;
use serde_json::{Value, json};

use shelfwise_core::{EstimationInput, HorizonPair};
use shelfwise_oracle::{
    ExternalEstimator, HttpOracleClient, OracleConfig, OracleOutcome, UnavailableReason,
};

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: String,
    delay: Duration,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl Stub {
    fn replying(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

async fn handle(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    stub.seen.lock().unwrap().push((auth, body));
    tokio::time::sleep(stub.delay).await;
    (stub.status, stub.body.clone())
}

async fn serve(stub: Stub) -> SocketAddr {
    let app = Router::new()
        .route("/estimate", post(handle))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, timeout: Duration) -> HttpOracleClient {
    // Bypass any ambient HTTP(S)_PROXY so requests hit the local stub.
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpOracleClient::with_http(
        &OracleConfig::default()
            .with_endpoint(format!("http://{addr}/estimate"))
            .with_timeout(timeout)
            .with_token("test-token"),
        http,
    )
    .unwrap()
}

fn input() -> EstimationInput {
    EstimationInput::new(
        "Frozen ground beef",
        "Meat",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn success_maps_days_into_horizon_and_sends_item() {
    let stub = Stub::replying(StatusCode::OK, r#"{"shelfLifeDays": 120, "restockDays": 21}"#);
    let seen = stub.seen.clone();
    let addr = serve(stub).await;

    let outcome = client(addr, Duration::from_secs(2)).try_external(&input()).await;
    assert_eq!(outcome, OracleOutcome::Ok(HorizonPair::new(120, 21)));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "exactly one attempt");
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-token"));
    assert_eq!(
        body,
        &json!({"name": "Frozen ground beef", "category": "Meat", "purchasedAt": "2024-01-01"})
    );
}

#[tokio::test]
async fn server_error_is_unavailable_without_retry() {
    let stub = Stub::replying(StatusCode::SERVICE_UNAVAILABLE, "down for maintenance");
    let seen = stub.seen.clone();
    let addr = serve(stub).await;

    let outcome = client(addr, Duration::from_secs(2)).try_external(&input()).await;
    assert_eq!(outcome, OracleOutcome::Unavailable(UnavailableReason::Status(503)));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let addr = serve(Stub::replying(StatusCode::OK, "<html>hello</html>")).await;

    let outcome = client(addr, Duration::from_secs(2)).try_external(&input()).await;
    assert!(matches!(
        outcome,
        OracleOutcome::Unavailable(UnavailableReason::Malformed(_))
    ));
}

#[tokio::test]
async fn missing_field_is_malformed() {
    let addr = serve(Stub::replying(StatusCode::OK, r#"{"shelfLifeDays": 4}"#)).await;

    let outcome = client(addr, Duration::from_secs(2)).try_external(&input()).await;
    assert_eq!(
        outcome,
        OracleOutcome::Unavailable(UnavailableReason::Malformed(
            "missing field `restockDays`".to_string()
        ))
    );
}

#[tokio::test]
async fn slow_oracle_times_out() {
    let stub = Stub::replying(StatusCode::OK, r#"{"shelfLifeDays": 1, "restockDays": 1}"#)
        .after(Duration::from_secs(5));
    let addr = serve(stub).await;

    let started = std::time::Instant::now();
    let outcome = client(addr, Duration::from_millis(150)).try_external(&input()).await;
    assert_eq!(outcome, OracleOutcome::Unavailable(UnavailableReason::Timeout));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn unreachable_oracle_is_a_network_failure() {
    // Grab a free port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = client(addr, Duration::from_secs(2)).try_external(&input()).await;
    assert!(matches!(
        outcome,
        OracleOutcome::Unavailable(UnavailableReason::Network(_))
    ));
}
