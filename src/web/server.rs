use axum::http::header;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::FoodCatalog;
use crate::cli::ServeArgs;
use crate::matching::engine::{Lookup, Resolver};
use crate::utils::validation::{split_food_list, validate_batch, ValidationError};
use crate::views::category::foods_in_category;
use crate::views::compare::compare;
use crate::views::info::food_info;
use crate::views::labels::render_labels;
use crate::views::meals::suggest_meals_for;

/// Largest accepted request body; food lists are small
pub const MAX_REQUEST_BODY: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub catalog: &'static FoodCatalog,
}

/// Enhanced error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Food names for batch endpoints, either a JSON array or one comma-separated string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FoodList {
    Names(Vec<String>),
    Csv(String),
}

impl FoodList {
    fn into_names(self) -> Vec<String> {
        match self {
            Self::Names(names) => names,
            Self::Csv(list) => split_food_list(&list),
        }
    }
}

/// Body of `POST /api/compare` and `POST /api/labels`
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub foods: FoodList,
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Deserialize)]
struct MealParams {
    preference: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

fn invalid_input(err: &ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(create_safe_error_response("invalid_input", &err.to_string(), None)),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ServeArgs, catalog: &'static FoodCatalog) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args, catalog).await })
}

/// Routes and handlers without middleware.
///
/// Used directly by tests; rate limiting needs the peer address, which
/// in-process requests do not carry.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/search", get(search_handler))
        .route("/api/category/{name}", get(category_handler))
        .route("/api/compare", post(compare_handler))
        .route("/api/labels", post(labels_handler))
        .route("/api/meals", get(meals_handler))
        .route("/api/catalog", get(catalog_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(catalog: &'static FoodCatalog) -> anyhow::Result<Router> {
    let state = Arc::new(AppState { catalog });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    // Build router with comprehensive security layers
    let app = routes(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(100))
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs, catalog: &'static FoodCatalog) -> anyhow::Result<()> {
    let app = create_router(catalog)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting food-resolver web server at http://{addr}");
    tracing::info!("Serving {} foods", catalog.len());

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!("Could not open browser: {}", e);
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Full information for every food a query resolves to
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let resolver = Resolver::new(state.catalog);

    match food_info(&resolver, &query) {
        Lookup::Found(info) => Json(info).into_response(),
        Lookup::NotFound => (
            StatusCode::NOT_FOUND,
            Json(create_safe_error_response(
                "not_found",
                &format!("Food '{}' not found in database", query.trim()),
                None,
            )),
        )
            .into_response(),
        Lookup::InvalidInput(err) => invalid_input(&err),
    }
}

async fn category_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    Json(foods_in_category(state.catalog, &name)).into_response()
}

/// Validate a batch body, returning the food names or an error response
fn batch_names(body: Result<Json<BatchRequest>, JsonRejection>) -> Result<Vec<String>, Response> {
    let Json(request) = body.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "invalid_request",
                "Expected a JSON body like {\"foods\": [\"Ragi\", \"Wheat\"]}",
                Some(&rejection.body_text()),
            )),
        )
            .into_response()
    })?;

    let names = request.foods.into_names();
    validate_batch(&names).map_err(|err| invalid_input(&err))?;
    Ok(names)
}

async fn compare_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    match batch_names(body) {
        Ok(names) => {
            let resolver = Resolver::new(state.catalog);
            Json(compare(&resolver, &names)).into_response()
        }
        Err(response) => response,
    }
}

async fn labels_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    match batch_names(body) {
        Ok(names) => {
            let resolver = Resolver::new(state.catalog);
            Json(render_labels(&resolver, &names)).into_response()
        }
        Err(response) => response,
    }
}

async fn meals_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MealParams>,
) -> Response {
    let preference = params.preference.unwrap_or_default();
    Json(suggest_meals_for(state.catalog, &preference)).into_response()
}

/// The keyed catalog export
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.catalog.to_export_json() {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(create_safe_error_response(
                "internal_error",
                "Failed to export catalog",
                Some(&e.to_string()),
            )),
        )
            .into_response(),
    }
}
