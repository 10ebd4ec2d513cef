// src/handlers/estabelecimento.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        validacao::{CNPJ_RE, TELEFONE_RE},
    },
    config::AppState,
    models::{
        estabelecimento::EstabelecimentoResponse, produto::ProdutoEstabelecimentoResponse,
    },
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstabelecimentoPayload {
    #[validate(length(min = 1, max = 75, message = "Nome não pode ser vazio"))]
    #[schema(example = "Pizzaria do Bairro")]
    pub nome: String,

    #[validate(regex(path = *CNPJ_RE, message = "CNPJ deve estar no formato: XX.XXX.XXX/XXXX-XX"))]
    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,

    #[validate(regex(path = *TELEFONE_RE, message = "Telefone deve estar em um formato válido"))]
    #[schema(example = "(41) 3333-4444")]
    pub telefone: String,

    #[validate(email(message = "Email deve ser válido"))]
    #[schema(example = "contato@pizzariadobairro.com.br")]
    pub email: String,

    pub ramo_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProdutoEstabelecimentoPayload {
    pub produto_id: Uuid,

    #[schema(example = "10.00")]
    pub preco_unitario: Decimal,

    #[schema(example = "8.00")]
    pub preco_promocional: Option<Decimal>,

    pub data_hora_inicio_promocao: Option<DateTime<Utc>>,
    pub data_hora_fim_promocao: Option<DateTime<Utc>>,
}

// POST /api/v1/estabelecimentos
#[utoipa::path(
    post,
    path = "/api/v1/estabelecimentos",
    tag = "Estabelecimentos",
    request_body = CreateEstabelecimentoPayload,
    responses(
        (status = 201, description = "Estabelecimento criado", body = EstabelecimentoResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Ramo não encontrado"),
        (status = 422, description = "CNPJ já cadastrado")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateEstabelecimentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let estabelecimento = app_state
        .estabelecimento_service
        .create(
            &app_state.db_pool,
            &payload.nome,
            &payload.cnpj,
            &payload.telefone,
            &payload.email,
            payload.ramo_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(estabelecimento)))
}

// GET /api/v1/estabelecimentos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/estabelecimentos/{id}",
    tag = "Estabelecimentos",
    params(("id" = Uuid, Path, description = "ID do estabelecimento")),
    responses(
        (status = 200, description = "Estabelecimento encontrado", body = EstabelecimentoResponse),
        (status = 404, description = "Estabelecimento não encontrado")
    )
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let estabelecimento = app_state
        .estabelecimento_service
        .find_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(estabelecimento)))
}

// GET /api/v1/estabelecimentos
#[utoipa::path(
    get,
    path = "/api/v1/estabelecimentos",
    tag = "Estabelecimentos",
    responses(
        (status = 200, description = "Lista de estabelecimentos", body = Vec<EstabelecimentoResponse>)
    )
)]
pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let estabelecimentos = app_state
        .estabelecimento_service
        .find_all(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(estabelecimentos)))
}

// GET /api/v1/estabelecimentos/nome/{nome}
#[utoipa::path(
    get,
    path = "/api/v1/estabelecimentos/nome/{nome}",
    tag = "Estabelecimentos",
    params(("nome" = String, Path, description = "Palavra-chave do nome")),
    responses(
        (status = 200, description = "Estabelecimentos encontrados", body = Vec<EstabelecimentoResponse>)
    )
)]
pub async fn find_by_nome(
    State(app_state): State<AppState>,
    Path(nome): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let estabelecimentos = app_state
        .estabelecimento_service
        .find_by_nome(&app_state.db_pool, &nome)
        .await?;

    Ok((StatusCode::OK, Json(estabelecimentos)))
}

// GET /api/v1/estabelecimentos/ramo/{ramoId}
#[utoipa::path(
    get,
    path = "/api/v1/estabelecimentos/ramo/{ramoId}",
    tag = "Estabelecimentos",
    params(("ramoId" = Uuid, Path, description = "ID do ramo")),
    responses(
        (status = 200, description = "Estabelecimentos do ramo", body = Vec<EstabelecimentoResponse>),
        (status = 404, description = "Ramo não encontrado")
    )
)]
pub async fn find_by_ramo(
    State(app_state): State<AppState>,
    Path(ramo_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let estabelecimentos = app_state
        .estabelecimento_service
        .find_by_ramo(&app_state.db_pool, ramo_id)
        .await?;

    Ok((StatusCode::OK, Json(estabelecimentos)))
}

// PUT /api/v1/estabelecimentos/{id}
#[utoipa::path(
    put,
    path = "/api/v1/estabelecimentos/{id}",
    tag = "Estabelecimentos",
    params(("id" = Uuid, Path, description = "ID do estabelecimento")),
    request_body = CreateEstabelecimentoPayload,
    responses(
        (status = 200, description = "Estabelecimento atualizado", body = EstabelecimentoResponse),
        (status = 404, description = "Estabelecimento ou ramo não encontrado"),
        (status = 422, description = "CNPJ já cadastrado")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateEstabelecimentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let estabelecimento = app_state
        .estabelecimento_service
        .update(
            &app_state.db_pool,
            id,
            &payload.nome,
            &payload.cnpj,
            &payload.telefone,
            &payload.email,
            payload.ramo_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(estabelecimento)))
}

// DELETE /api/v1/estabelecimentos/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/estabelecimentos/{id}",
    tag = "Estabelecimentos",
    params(("id" = Uuid, Path, description = "ID do estabelecimento")),
    responses(
        (status = 204, description = "Estabelecimento removido"),
        (status = 404, description = "Estabelecimento não encontrado")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .estabelecimento_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// POST /api/v1/estabelecimentos/{id}/produtos
#[utoipa::path(
    post,
    path = "/api/v1/estabelecimentos/{id}/produtos",
    tag = "Estabelecimentos",
    params(("id" = Uuid, Path, description = "ID do estabelecimento")),
    request_body = AddProdutoEstabelecimentoPayload,
    responses(
        (status = 201, description = "Produto adicionado ao cardápio", body = ProdutoEstabelecimentoResponse),
        (status = 404, description = "Estabelecimento ou produto não encontrado"),
        (status = 422, description = "Produto já cadastrado neste estabelecimento")
    )
)]
pub async fn adicionar_produto(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddProdutoEstabelecimentoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let listagem = app_state
        .estabelecimento_service
        .adicionar_produto(
            &app_state.db_pool,
            id,
            payload.produto_id,
            payload.preco_unitario,
            payload.preco_promocional,
            payload.data_hora_inicio_promocao,
            payload.data_hora_fim_promocao,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(listagem)))
}

// GET /api/v1/estabelecimentos/{id}/produtos
#[utoipa::path(
    get,
    path = "/api/v1/estabelecimentos/{id}/produtos",
    tag = "Estabelecimentos",
    params(("id" = Uuid, Path, description = "ID do estabelecimento")),
    responses(
        (status = 200, description = "Cardápio do estabelecimento", body = Vec<ProdutoEstabelecimentoResponse>),
        (status = 404, description = "Estabelecimento não encontrado")
    )
)]
pub async fn listar_produtos(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let listagens = app_state
        .estabelecimento_service
        .listar_produtos(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(listagens)))
}
