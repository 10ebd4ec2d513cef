// src/handlers/pedido.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::pedido::{CreatePedidoPayload, HistoricoClienteResponse, PedidoResponse},
};

// POST /api/v1/pedidos
#[utoipa::path(
    post,
    path = "/api/v1/pedidos",
    tag = "Pedidos",
    request_body = CreatePedidoPayload,
    responses(
        (status = 201, description = "Pedido criado", body = PedidoResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Cliente, estabelecimento, endereço ou produto inexistente")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let pedido = app_state
        .pedido_service
        .create(&app_state.db_pool, &payload)
        .await
        .map_err(|e| match e {
            // Na criação, referência ausente é falha de validação do payload
            AppError::NotFound(msg) => AppError::InvalidReference(msg),
            outro => outro,
        })?;

    Ok((StatusCode::CREATED, Json(pedido)))
}

// GET /api/v1/pedidos/{numeroPedido}
#[utoipa::path(
    get,
    path = "/api/v1/pedidos/{numeroPedido}",
    tag = "Pedidos",
    params(("numeroPedido" = String, Path, description = "Número do pedido (YYYYMM-xxxxx)")),
    responses(
        (status = 200, description = "Pedido encontrado", body = PedidoResponse),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn get_by_numero_pedido(
    State(app_state): State<AppState>,
    Path(numero_pedido): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pedido = app_state
        .pedido_service
        .get_by_numero_pedido(&app_state.db_pool, &numero_pedido)
        .await?;

    Ok((StatusCode::OK, Json(pedido)))
}

// GET /api/v1/pedidos/historico/cpf/{cpf}
#[utoipa::path(
    get,
    path = "/api/v1/pedidos/historico/cpf/{cpf}",
    tag = "Pedidos",
    params(("cpf" = String, Path, description = "CPF/documento do cliente")),
    responses(
        (status = 200, description = "Histórico de consumo do cliente", body = HistoricoClienteResponse),
        (status = 404, description = "Nenhum pedido encontrado para o documento")
    )
)]
pub async fn historico_por_cpf(
    State(app_state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let historico = app_state
        .pedido_service
        .historico_por_documento(&app_state.db_pool, &cpf)
        .await?;

    Ok((StatusCode::OK, Json(historico)))
}

// GET /api/v1/pedidos/historico/pedido/{numeroPedido}
#[utoipa::path(
    get,
    path = "/api/v1/pedidos/historico/pedido/{numeroPedido}",
    tag = "Pedidos",
    params(("numeroPedido" = String, Path, description = "Número do pedido (YYYYMM-xxxxx)")),
    responses(
        (status = 200, description = "Histórico de consumo do cliente do pedido", body = HistoricoClienteResponse),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn historico_por_numero_pedido(
    State(app_state): State<AppState>,
    Path(numero_pedido): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let historico = app_state
        .pedido_service
        .historico_por_numero_pedido(&app_state.db_pool, &numero_pedido)
        .await?;

    Ok((StatusCode::OK, Json(historico)))
}
