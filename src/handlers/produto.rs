// src/handlers/produto.rs

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

use crate::{common::error::AppError, config::AppState, models::produto::ProdutoResponse};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProdutoPayload {
    #[validate(length(min = 1, max = 50, message = "Nome do produto não pode ser vazio"))]
    #[schema(example = "Pizza Margherita")]
    pub nome: String,

    #[validate(length(min = 1, max = 150, message = "Descrição do produto não pode ser vazia"))]
    #[schema(example = "Molho de tomate, muçarela e manjericão")]
    pub descricao: String,

    #[validate(length(min = 1, max = 20, message = "Unidade do produto não pode ser vazia"))]
    #[schema(example = "unidade")]
    pub unidade: String,

    pub categoria_id: Uuid,
}

// POST /api/v1/produtos
#[utoipa::path(
    post,
    path = "/api/v1/produtos",
    tag = "Produtos",
    request_body = CreateProdutoPayload,
    responses(
        (status = 201, description = "Produto criado", body = ProdutoResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let produto = app_state
        .produto_service
        .create(
            &app_state.db_pool,
            &payload.nome,
            &payload.descricao,
            &payload.unidade,
            payload.categoria_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(produto)))
}

// GET /api/v1/produtos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/produtos/{id}",
    tag = "Produtos",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = ProdutoResponse),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let produto = app_state
        .produto_service
        .find_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(produto)))
}

// GET /api/v1/produtos
#[utoipa::path(
    get,
    path = "/api/v1/produtos",
    tag = "Produtos",
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<ProdutoResponse>)
    )
)]
pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state
        .produto_service
        .find_all(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /api/v1/produtos/nome/{nome}
#[utoipa::path(
    get,
    path = "/api/v1/produtos/nome/{nome}",
    tag = "Produtos",
    params(("nome" = String, Path, description = "Palavra-chave do nome")),
    responses(
        (status = 200, description = "Produtos encontrados", body = Vec<ProdutoResponse>)
    )
)]
pub async fn find_by_nome(
    State(app_state): State<AppState>,
    Path(nome): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state
        .produto_service
        .find_by_nome(&app_state.db_pool, &nome)
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// GET /api/v1/produtos/categoria/{categoriaId}
#[utoipa::path(
    get,
    path = "/api/v1/produtos/categoria/{categoriaId}",
    tag = "Produtos",
    params(("categoriaId" = Uuid, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Produtos da categoria", body = Vec<ProdutoResponse>),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn find_by_categoria(
    State(app_state): State<AppState>,
    Path(categoria_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state
        .produto_service
        .find_by_categoria(&app_state.db_pool, categoria_id)
        .await?;

    Ok((StatusCode::OK, Json(produtos)))
}

// PUT /api/v1/produtos/{id}
#[utoipa::path(
    put,
    path = "/api/v1/produtos/{id}",
    tag = "Produtos",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = CreateProdutoPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = ProdutoResponse),
        (status = 404, description = "Produto ou categoria não encontrado")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateProdutoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let produto = app_state
        .produto_service
        .update(
            &app_state.db_pool,
            id,
            &payload.nome,
            &payload.descricao,
            &payload.unidade,
            payload.categoria_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(produto)))
}

// DELETE /api/v1/produtos/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/produtos/{id}",
    tag = "Produtos",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .produto_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
