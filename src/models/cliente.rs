// src/models/cliente.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::endereco::Endereco;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub documento_identificacao: String,
    pub observacoes: Option<String>,

    // Endereço próprio do cliente (1:1, opcional)
    pub endereco_id: Option<Uuid>,
}

// Resposta com o endereço embutido no lugar da FK.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: Uuid,

    #[schema(example = "Maria da Silva")]
    pub nome: String,

    #[schema(example = "maria@email.com")]
    pub email: String,

    #[schema(example = "(41) 99999-1234")]
    pub telefone: String,

    #[schema(example = "12345678900")]
    pub documento_identificacao: String,

    pub observacoes: Option<String>,

    pub endereco: Option<Endereco>,
}

impl ClienteResponse {
    /// Conversão explícita registro -> DTO, sem reflexão.
    pub fn montar(cliente: Cliente, endereco: Option<Endereco>) -> Self {
        Self {
            id: cliente.id,
            nome: cliente.nome,
            email: cliente.email,
            telefone: cliente.telefone,
            documento_identificacao: cliente.documento_identificacao,
            observacoes: cliente.observacoes,
            endereco,
        }
    }
}
