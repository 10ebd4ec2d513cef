// src/handlers/categoria_produto.rs

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

use crate::{common::error::AppError, config::AppState, models::produto::CategoriaProduto};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoriaProdutoPayload {
    #[validate(length(min = 1, max = 50, message = "Categoria não pode ser vazia"))]
    #[schema(example = "Pizzas Salgadas")]
    pub categoria: String,

    #[validate(length(max = 150, message = "Descrição não pode exceder 150 caracteres"))]
    #[schema(example = "Pizzas tradicionais e especiais")]
    pub descricao: Option<String>,
}

// POST /api/v1/categorias-produto
#[utoipa::path(
    post,
    path = "/api/v1/categorias-produto",
    tag = "Categorias de Produto",
    request_body = CreateCategoriaProdutoPayload,
    responses(
        (status = 201, description = "Categoria criada", body = CategoriaProduto),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Categoria já cadastrada")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCategoriaProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let categoria = app_state
        .categoria_produto_service
        .create(
            &app_state.db_pool,
            &payload.categoria,
            payload.descricao.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(categoria)))
}

// GET /api/v1/categorias-produto/{id}
#[utoipa::path(
    get,
    path = "/api/v1/categorias-produto/{id}",
    tag = "Categorias de Produto",
    params(("id" = Uuid, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria encontrada", body = CategoriaProduto),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let categoria = app_state
        .categoria_produto_service
        .find_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(categoria)))
}

// GET /api/v1/categorias-produto
#[utoipa::path(
    get,
    path = "/api/v1/categorias-produto",
    tag = "Categorias de Produto",
    responses(
        (status = 200, description = "Lista de categorias", body = Vec<CategoriaProduto>)
    )
)]
pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categorias = app_state
        .categoria_produto_service
        .find_all(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(categorias)))
}

// GET /api/v1/categorias-produto/nome/{categoria}
#[utoipa::path(
    get,
    path = "/api/v1/categorias-produto/nome/{categoria}",
    tag = "Categorias de Produto",
    params(("categoria" = String, Path, description = "Nome exato da categoria")),
    responses(
        (status = 200, description = "Categorias encontradas", body = Vec<CategoriaProduto>)
    )
)]
pub async fn find_by_categoria(
    State(app_state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let categorias = app_state
        .categoria_produto_service
        .find_by_categoria(&app_state.db_pool, &categoria)
        .await?;

    Ok((StatusCode::OK, Json(categorias)))
}

// PUT /api/v1/categorias-produto/{id}
#[utoipa::path(
    put,
    path = "/api/v1/categorias-produto/{id}",
    tag = "Categorias de Produto",
    params(("id" = Uuid, Path, description = "ID da categoria")),
    request_body = CreateCategoriaProdutoPayload,
    responses(
        (status = 200, description = "Categoria atualizada", body = CategoriaProduto),
        (status = 404, description = "Categoria não encontrada"),
        (status = 422, description = "Categoria já cadastrada")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateCategoriaProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let categoria = app_state
        .categoria_produto_service
        .update(
            &app_state.db_pool,
            id,
            &payload.categoria,
            payload.descricao.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(categoria)))
}

// DELETE /api/v1/categorias-produto/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/categorias-produto/{id}",
    tag = "Categorias de Produto",
    params(("id" = Uuid, Path, description = "ID da categoria")),
    responses(
        (status = 204, description = "Categoria removida"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .categoria_produto_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
