use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};
use wallet_api::config::CONFIG;
use wallet_api::core::models::wallet::WalletRequest;
use wallet_api::{CachedWalletRepository, InMemoryCache, InMemoryStore, TransactionService, WalletError};

type AppService = TransactionService<CachedWalletRepository<InMemoryStore, InMemoryCache>>;

#[derive(Serialize)]
struct BalanceResponse {
    balance: Decimal,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// Newtype wrapper so service errors map to status codes in one place
enum ApiError {
    Wallet(WalletError),
    BadRequest(String),
}

impl From<WalletError> for ApiError {
    fn from(err: WalletError) -> Self {
        ApiError::Wallet(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ApiError::Wallet(err @ WalletError::WalletNotFound(_)) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Wallet(err @ WalletError::NonPositiveAmount)
            | ApiError::Wallet(err @ WalletError::InsufficientBalance) => (StatusCode::FORBIDDEN, err.to_string()),
            ApiError::Wallet(err) => {
                error!(%err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

async fn ping() -> impl IntoResponse {
    Json(json!({ "message": "pong" }))
}

async fn get_balance(
    State(service): State<Arc<AppService>>,
    Path(wallet_id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = service.get_balance(wallet_id).await?;
    Ok(Json(BalanceResponse { balance }))
}

async fn debit(
    State(service): State<Arc<AppService>>,
    Path(wallet_id): Path<i64>,
    body: Result<Json<WalletRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = body?;
    service.debit(wallet_id, request.amount).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn credit(
    State(service): State<Arc<AppService>>,
    Path(wallet_id): Path<i64>,
    body: Result<Json<WalletRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = body?;
    service.credit(wallet_id, request.amount).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();

    // Seed wallets; creation is not part of the HTTP surface
    let store = InMemoryStore::new();
    let seed_balance = Decimal::new(13_602, 2); // 136.02
    for _ in 0..3 {
        store.create(seed_balance).await;
    }

    let cache = InMemoryCache::new();
    let repository = CachedWalletRepository::new(store, cache, CONFIG.cache_ttl());
    let service = Arc::new(TransactionService::new(repository));

    // Define API routes
    let app = Router::new()
        .route("/ping", get(ping))
        .route("/api/v1/wallets/{wallet_id}/balance", get(get_balance))
        .route("/api/v1/wallets/{wallet_id}/debit", post(debit))
        .route("/api/v1/wallets/{wallet_id}/credit", post(credit))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
        .with_state(service);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Wallet API running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
