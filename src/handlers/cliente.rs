// src/handlers/cliente.rs

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
    common::{error::AppError, validacao::TELEFONE_RE},
    config::AppState,
    models::{cliente::ClienteResponse, endereco::CreateEnderecoPayload},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientePayload {
    #[validate(length(min = 3, max = 100, message = "Nome deve ter entre 3 e 100 caracteres"))]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    #[validate(email(message = "Email deve ser válido"))]
    #[schema(example = "maria@email.com")]
    pub email: String,

    #[validate(regex(path = *TELEFONE_RE, message = "Telefone deve estar em um formato válido"))]
    #[schema(example = "(41) 99999-1234")]
    pub telefone: String,

    #[validate(length(min = 11, max = 14, message = "Documento deve ter entre 11 e 14 caracteres"))]
    #[schema(example = "12345678900")]
    pub documento_identificacao: String,

    #[validate(length(max = 500, message = "Observações não pode exceder 500 caracteres"))]
    pub observacoes: Option<String>,

    #[validate(nested)]
    pub endereco: Option<CreateEnderecoPayload>,
}

// POST /api/v1/clientes
#[utoipa::path(
    post,
    path = "/api/v1/clientes",
    tag = "Clientes",
    request_body = CreateClientePayload,
    responses(
        (status = 201, description = "Cliente criado", body = ClienteResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Email ou documento já cadastrado")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state
        .cliente_service
        .create(
            &app_state.db_pool,
            &payload.nome,
            &payload.email,
            &payload.telefone,
            &payload.documento_identificacao,
            payload.observacoes.as_deref(),
            payload.endereco.as_ref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// GET /api/v1/clientes/{id}
#[utoipa::path(
    get,
    path = "/api/v1/clientes/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = ClienteResponse),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn find_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state
        .cliente_service
        .find_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// GET /api/v1/clientes
#[utoipa::path(
    get,
    path = "/api/v1/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<ClienteResponse>)
    )
)]
pub async fn find_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state
        .cliente_service
        .find_all(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(clientes)))
}

// GET /api/v1/clientes/email/{email}
#[utoipa::path(
    get,
    path = "/api/v1/clientes/email/{email}",
    tag = "Clientes",
    params(("email" = String, Path, description = "Email do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = ClienteResponse),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn find_by_email(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cliente = app_state
        .cliente_service
        .find_by_email(&app_state.db_pool, &email)
        .await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// PUT /api/v1/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/v1/clientes/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    request_body = CreateClientePayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = ClienteResponse),
        (status = 404, description = "Cliente não encontrado"),
        (status = 422, description = "Email ou documento já cadastrado")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cliente = app_state
        .cliente_service
        .update(
            &app_state.db_pool,
            id,
            &payload.nome,
            &payload.email,
            &payload.telefone,
            &payload.documento_identificacao,
            payload.observacoes.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(cliente)))
}

// DELETE /api/v1/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/clientes/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .cliente_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
