use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::investment::service::{
        command::DynInvestmentCommandService, query::DynInvestmentQueryService,
    },
    domain::{
        requests::{AmountRequest, CreateInvestmentRequest},
        responses::{ApiResponse, InvestmentResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/investments",
    tag = "Investment",
    responses(
        (status = 200, description = "List of investments", body = ApiResponse<Vec<InvestmentResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_investments(
    Extension(service): Extension<DynInvestmentQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_all().await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    post,
    path = "/investments",
    tag = "Investment",
    request_body = CreateInvestmentRequest,
    responses(
        (status = 201, description = "Investment created", body = ApiResponse<InvestmentResponse>),
        (status = 400, description = "Validation error, duplicate name, or invalid expiration date"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_investment(
    Extension(service): Extension<DynInvestmentCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateInvestmentRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.create(&body).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/investments/{id}",
    tag = "Investment",
    params(("id" = String, Path, description = "Investment name (exact match)")),
    responses(
        (status = 200, description = "Investment details", body = ApiResponse<InvestmentResponse>),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn get_investment(
    Extension(service): Extension<DynInvestmentQueryService>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.find_by_name(&name).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    get,
    path = "/investments/search/{name}",
    tag = "Investment",
    params(("name" = String, Path, description = "Name fragment")),
    responses(
        (status = 200, description = "Matching investments, possibly empty", body = ApiResponse<Vec<InvestmentResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_investments(
    Extension(service): Extension<DynInvestmentQueryService>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.search_by_name(&name).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    delete,
    path = "/investments/{id}",
    tag = "Investment",
    params(("id" = i32, Path, description = "Investment ID")),
    responses(
        (status = 204, description = "Investment deleted"),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn delete_investment(
    Extension(service): Extension<DynInvestmentCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    patch,
    path = "/investments/{id}/apply",
    tag = "Investment",
    params(("id" = i32, Path, description = "Investment ID")),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Amount applied", body = ApiResponse<InvestmentResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn apply_to_investment(
    Extension(service): Extension<DynInvestmentCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AmountRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.apply(id, &body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

#[utoipa::path(
    patch,
    path = "/investments/{id}/withdraw",
    tag = "Investment",
    params(("id" = i32, Path, description = "Investment ID")),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Amount withdrawn", body = ApiResponse<InvestmentResponse>),
        (status = 400, description = "Validation error or insufficient balance"),
        (status = 404, description = "Investment not found")
    )
)]
pub async fn withdraw_from_investment(
    Extension(service): Extension<DynInvestmentCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AmountRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    match service.withdraw(id, &body).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(err) => Err(AppErrorHttp(err)),
    }
}

pub fn investment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/investments",
            get(get_investments).post(create_investment),
        )
        .route("/investments/search/{name}", get(search_investments))
        .route(
            "/investments/{id}",
            get(get_investment).delete(delete_investment),
        )
        .route("/investments/{id}/apply", patch(apply_to_investment))
        .route("/investments/{id}/withdraw", patch(withdraw_from_investment))
        .layer(Extension(app_state.di_container.command_service.clone()))
        .layer(Extension(app_state.di_container.query_service.clone()))
}
