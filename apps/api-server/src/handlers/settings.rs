//! Read-only reference data endpoints (post types, locations).

use actix_web::{HttpResponse, web};

use helpboard_core::domain::{LOCATIONS_PARTITION, TYPES_PARTITION};
use helpboard_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/settings/types
pub async fn types(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries = state.settings.list(TYPES_PARTITION).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}

/// GET /api/settings/locations
pub async fn locations(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries = state.settings.list(LOCATIONS_PARTITION).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}
