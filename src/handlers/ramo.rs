// src/handlers/ramo.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError, config::AppState, models::estabelecimento::RamoEstabelecimento,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRamoPayload {
    #[validate(length(min = 1, max = 50, message = "Nome do ramo não pode ser vazio"))]
    #[schema(example = "Pizzaria")]
    pub nome: String,

    #[validate(length(max = 150, message = "Descrição não pode exceder 150 caracteres"))]
    #[schema(example = "Estabelecimentos especializados em pizzas")]
    pub descricao: Option<String>,
}

// POST /api/v1/ramos
#[utoipa::path(
    post,
    path = "/api/v1/ramos",
    tag = "Ramos",
    request_body = CreateRamoPayload,
    responses(
        (status = 201, description = "Ramo criado", body = RamoEstabelecimento),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateRamoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ramo = app_state
        .ramo_service
        .create(&app_state.db_pool, &payload.nome, payload.descricao.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(ramo)))
}

// GET /api/v1/ramos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/ramos/{id}",
    tag = "Ramos",
    params(("id" = Uuid, Path, description = "ID do ramo")),
    responses(
        (status = 200, description = "Ramo encontrado", body = RamoEstabelecimento),
        (status = 404, description = "Ramo não encontrado")
    )
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ramo = app_state
        .ramo_service
        .find_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(ramo)))
}

// GET /api/v1/ramos
#[utoipa::path(
    get,
    path = "/api/v1/ramos",
    tag = "Ramos",
    responses(
        (status = 200, description = "Lista de ramos", body = Vec<RamoEstabelecimento>)
    )
)]
pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ramos = app_state.ramo_service.find_all(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(ramos)))
}

// GET /api/v1/ramos/nome/{nome}
#[utoipa::path(
    get,
    path = "/api/v1/ramos/nome/{nome}",
    tag = "Ramos",
    params(("nome" = String, Path, description = "Palavra-chave do nome")),
    responses(
        (status = 200, description = "Ramos encontrados", body = Vec<RamoEstabelecimento>)
    )
)]
pub async fn find_by_nome(
    State(app_state): State<AppState>,
    Path(nome): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ramos = app_state
        .ramo_service
        .find_by_nome(&app_state.db_pool, &nome)
        .await?;

    Ok((StatusCode::OK, Json(ramos)))
}

// PUT /api/v1/ramos/{id}
#[utoipa::path(
    put,
    path = "/api/v1/ramos/{id}",
    tag = "Ramos",
    params(("id" = Uuid, Path, description = "ID do ramo")),
    request_body = CreateRamoPayload,
    responses(
        (status = 200, description = "Ramo atualizado", body = RamoEstabelecimento),
        (status = 404, description = "Ramo não encontrado")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateRamoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ramo = app_state
        .ramo_service
        .update(
            &app_state.db_pool,
            id,
            &payload.nome,
            payload.descricao.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(ramo)))
}

// DELETE /api/v1/ramos/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/ramos/{id}",
    tag = "Ramos",
    params(("id" = Uuid, Path, description = "ID do ramo")),
    responses(
        (status = 204, description = "Ramo removido"),
        (status = 404, description = "Ramo não encontrado")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .ramo_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
