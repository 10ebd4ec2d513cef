// src/handlers/endereco.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::endereco::{CreateEnderecoPayload, Endereco},
};

// POST /api/v1/enderecos
#[utoipa::path(
    post,
    path = "/api/v1/enderecos",
    tag = "Endereços",
    request_body = CreateEnderecoPayload,
    responses(
        (status = 201, description = "Endereço criado", body = Endereco),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateEnderecoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let endereco = app_state
        .endereco_service
        .create(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(endereco)))
}

// GET /api/v1/enderecos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/enderecos/{id}",
    tag = "Endereços",
    params(("id" = Uuid, Path, description = "ID do endereço")),
    responses(
        (status = 200, description = "Endereço encontrado", body = Endereco),
        (status = 404, description = "Endereço não encontrado")
    )
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let endereco = app_state
        .endereco_service
        .find_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(endereco)))
}

// GET /api/v1/enderecos
#[utoipa::path(
    get,
    path = "/api/v1/enderecos",
    tag = "Endereços",
    responses(
        (status = 200, description = "Lista de endereços", body = Vec<Endereco>)
    )
)]
pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let enderecos = app_state
        .endereco_service
        .find_all(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(enderecos)))
}

// GET /api/v1/enderecos/cidade/{cidade}
#[utoipa::path(
    get,
    path = "/api/v1/enderecos/cidade/{cidade}",
    tag = "Endereços",
    params(("cidade" = String, Path, description = "Nome da cidade")),
    responses(
        (status = 200, description = "Endereços da cidade", body = Vec<Endereco>)
    )
)]
pub async fn find_by_cidade(
    State(app_state): State<AppState>,
    Path(cidade): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let enderecos = app_state
        .endereco_service
        .find_by_cidade(&app_state.db_pool, &cidade)
        .await?;

    Ok((StatusCode::OK, Json(enderecos)))
}

// GET /api/v1/enderecos/cep/{cep}
#[utoipa::path(
    get,
    path = "/api/v1/enderecos/cep/{cep}",
    tag = "Endereços",
    params(("cep" = String, Path, description = "CEP, com ou sem hífen")),
    responses(
        (status = 200, description = "Endereços com o CEP", body = Vec<Endereco>)
    )
)]
pub async fn find_by_cep(
    State(app_state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let enderecos = app_state
        .endereco_service
        .find_by_cep(&app_state.db_pool, &cep)
        .await?;

    Ok((StatusCode::OK, Json(enderecos)))
}

// PUT /api/v1/enderecos/{id}
#[utoipa::path(
    put,
    path = "/api/v1/enderecos/{id}",
    tag = "Endereços",
    params(("id" = Uuid, Path, description = "ID do endereço")),
    request_body = CreateEnderecoPayload,
    responses(
        (status = 200, description = "Endereço atualizado", body = Endereco),
        (status = 404, description = "Endereço não encontrado")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateEnderecoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let endereco = app_state
        .endereco_service
        .update(&app_state.db_pool, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(endereco)))
}

// DELETE /api/v1/enderecos/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/enderecos/{id}",
    tag = "Endereços",
    params(("id" = Uuid, Path, description = "ID do endereço")),
    responses(
        (status = 204, description = "Endereço removido"),
        (status = 404, description = "Endereço não encontrado")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .endereco_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
