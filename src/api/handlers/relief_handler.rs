//! Relief goods catalog, donation and supply handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Router,
};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::config::{MSG_DONATION_CREATED, MSG_SUPPLY_CREATED, MSG_SUPPLY_DELETED};
use crate::domain::{Donation, NewDonation, NewSupply, ReliefGood, Supply};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, MessageResponse};

/// Create relief routes
pub fn relief_routes() -> Router<AppState> {
    Router::new()
        .route("/all-relief-goods", get(list_relief_goods))
        .route("/all-relief-goods/:id", get(get_relief_good))
        .route("/donation", get(list_donations).post(create_donation))
        .route("/supply", get(list_supplies).post(create_supply))
        .route("/supply/:id", put(update_supply).delete(delete_supply))
}

/// List the relief goods catalog
#[utoipa::path(
    get,
    path = "/api/v1/all-relief-goods",
    tag = "Relief",
    responses((status = 200, description = "Catalog entries", body = [ReliefGood]))
)]
pub async fn list_relief_goods(State(state): State<AppState>) -> AppResult<Json<Vec<ReliefGood>>> {
    Ok(Json(state.relief_service.list_relief_goods().await?))
}

/// Fetch one catalog entry
#[utoipa::path(
    get,
    path = "/api/v1/all-relief-goods/{id}",
    tag = "Relief",
    params(("id" = String, Path, description = "Relief good id (UUID)")),
    responses(
        (status = 200, description = "Catalog entry", body = ReliefGood),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Relief goods not found", body = ErrorBody)
    )
)]
pub async fn get_relief_good(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ReliefGood>> {
    Ok(Json(state.relief_service.get_relief_good(id).await?))
}

/// Record a donation
#[utoipa::path(
    post,
    path = "/api/v1/donation",
    tag = "Relief",
    request_body = NewDonation,
    responses(
        (status = 201, description = "Donation recorded", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_donation(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewDonation>,
) -> AppResult<Created> {
    state.relief_service.create_donation(draft).await?;
    Ok(Created(MSG_DONATION_CREATED))
}

/// List donations
#[utoipa::path(
    get,
    path = "/api/v1/donation",
    tag = "Relief",
    responses((status = 200, description = "All donations", body = [Donation]))
)]
pub async fn list_donations(State(state): State<AppState>) -> AppResult<Json<Vec<Donation>>> {
    Ok(Json(state.relief_service.list_donations().await?))
}

/// Create a supply post
#[utoipa::path(
    post,
    path = "/api/v1/supply",
    tag = "Relief",
    request_body = NewSupply,
    responses(
        (status = 201, description = "Supply post created", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_supply(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<NewSupply>,
) -> AppResult<Created> {
    state.relief_service.create_supply(draft).await?;
    Ok(Created(MSG_SUPPLY_CREATED))
}

/// List supply posts
#[utoipa::path(
    get,
    path = "/api/v1/supply",
    tag = "Relief",
    responses((status = 200, description = "All supply posts", body = [Supply]))
)]
pub async fn list_supplies(State(state): State<AppState>) -> AppResult<Json<Vec<Supply>>> {
    Ok(Json(state.relief_service.list_supplies().await?))
}

/// Replace a supply post, creating it when the id is new
#[utoipa::path(
    put,
    path = "/api/v1/supply/{id}",
    tag = "Relief",
    params(("id" = String, Path, description = "Supply id (UUID)")),
    request_body = NewSupply,
    responses(
        (status = 200, description = "Stored supply post as `{success, data}`", body = Supply),
        (status = 400, description = "Validation error or malformed id", body = ErrorBody)
    )
)]
pub async fn update_supply(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(draft): ValidatedJson<NewSupply>,
) -> AppResult<Json<ApiResponse<Supply>>> {
    let supply = state.relief_service.update_supply(id, draft).await?;
    Ok(Json(ApiResponse::success(supply)))
}

/// Delete a supply post
#[utoipa::path(
    delete,
    path = "/api/v1/supply/{id}",
    tag = "Relief",
    params(("id" = String, Path, description = "Supply id (UUID)")),
    responses(
        (status = 200, description = "Supply deleted", body = MessageResponse),
        (status = 404, description = "Supply not found", body = ErrorBody)
    )
)]
pub async fn delete_supply(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.relief_service.delete_supply(id).await?;
    Ok(Json(MessageResponse::new(MSG_SUPPLY_DELETED)))
}
