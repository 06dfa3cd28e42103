use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    get,
    http::{header, StatusCode},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    post,
    web::{Data, Json, JsonConfig},
    HttpRequest, HttpResponse,
};
use chrono::Utc;
use serde_json::json;

use crate::{
    api::{state::State, swagger, types::TableQueryRequest},
    SERVICE_NAME,
};

#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/swagger"))
        .finish()
}

#[get("/api/info")]
pub async fn api_info(req: HttpRequest) -> HttpResponse {
    let info = req.connection_info();
    HttpResponse::Ok().json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "A simple RESTful API exposing filtered reads over PostgreSQL",
        "base_url": format!("{}://{}/", info.scheme(), info.host()),
        "endpoints": [
            {"path": "/", "method": "GET", "description": "Redirects to Swagger UI documentation"},
            {"path": "/swagger", "method": "GET", "description": "Swagger UI documentation"},
            {"path": "/health", "method": "GET", "description": "Health check endpoint"},
            {"path": "/api/salservice", "method": "POST", "description": "Query a table with filters"},
        ],
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/health")]
pub async fn health_check(state: Data<State>) -> HttpResponse {
    match state.query_service.check_connectivity().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "database": "connected",
            "timestamp": Utc::now().to_rfc3339(),
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "status": "unhealthy",
            "database": "disconnected",
            "error": e.to_string(),
            "timestamp": Utc::now().to_rfc3339(),
        })),
    }
}

#[post("/api/salservice")]
pub async fn sal_service(state: Data<State>, request: Json<TableQueryRequest>) -> HttpResponse {
    let request = request.into_inner();
    let table = match request.table.as_deref() {
        Some(table) if !table.is_empty() => table,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "Missing required parameter: TABLE"}))
        }
    };
    let filters = request.filters();
    match state.query_service.query_table(table, &filters).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) if e.is_validation() => {
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
        Err(e) => {
            log::error!("query against {table} failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

#[get("/static/swagger.json")]
pub async fn swagger_spec() -> HttpResponse {
    HttpResponse::Ok().json(swagger::openapi_document())
}

#[get("/swagger")]
pub async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(swagger::UI_HTML)
}

/// Default service for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "Not found"}))
}

/// Maps bodies that are not JSON (wrong content type or undecodable) to the
/// service's 400 envelope instead of actix's plain-text response.
pub fn json_error_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({"error": "Request must be JSON"})),
        )
        .into()
    })
}

/// Replaces non-JSON 500 bodies (panics, framework faults) with the generic
/// envelope; 500s already carrying a JSON envelope pass through untouched.
pub fn internal_error_handlers<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error)
}

fn render_internal_error<B: MessageBody + 'static>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.as_bytes().starts_with(b"application/json"))
        .unwrap_or(false);
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }
    let (req, res) = res.into_parts();
    let res = res.set_body(r#"{"error":"Internal server error"}"#.to_string());
    let mut res = ServiceResponse::new(req, res);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    Ok(ErrorHandlerResponse::Response(
        res.map_into_boxed_body().map_into_right_body(),
    ))
}
