// src/models/endereco.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validacao::CEP_RE;

// Mapeia o CREATE TYPE tipo_endereco do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_endereco", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoEndereco {
    Residencial,
    Comercial,
}

// O registro serve direto como resposta: endereço não embute nada.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Endereco {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Rua XV de Novembro")]
    pub rua: String,

    #[schema(example = "1500")]
    pub numero: String,

    #[schema(example = "Apto 32")]
    pub complemento: Option<String>,

    #[schema(example = "Curitiba")]
    pub cidade: String,

    #[schema(example = "PR")]
    pub estado: String,

    #[schema(example = "80000-100")]
    pub cep: String,

    #[schema(example = "Centro")]
    pub bairro: String,

    #[schema(example = "Em frente à praça")]
    pub ponto_referencia: Option<String>,

    pub tipo_endereco: TipoEndereco,
}

// Payload compartilhado: usado na rota de endereços e embutido na criação
// de cliente.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnderecoPayload {
    #[validate(length(min = 3, max = 100, message = "Rua deve ter entre 3 e 100 caracteres"))]
    #[schema(example = "Rua XV de Novembro")]
    pub rua: String,

    #[validate(length(min = 1, max = 10, message = "Número deve ter entre 1 e 10 caracteres"))]
    #[schema(example = "1500")]
    pub numero: String,

    #[validate(length(max = 100, message = "Complemento não pode exceder 100 caracteres"))]
    #[schema(example = "Apto 32")]
    pub complemento: Option<String>,

    #[validate(length(min = 3, max = 50, message = "Cidade deve ter entre 3 e 50 caracteres"))]
    #[schema(example = "Curitiba")]
    pub cidade: String,

    #[validate(length(equal = 2, message = "Estado deve ter 2 caracteres (ex: SP, RJ)"))]
    #[schema(example = "PR")]
    pub estado: String,

    #[validate(regex(path = *CEP_RE, message = "CEP deve estar no formato XXXXX-XXX ou XXXXXXXX"))]
    #[schema(example = "80000-100")]
    pub cep: String,

    #[validate(length(min = 3, max = 50, message = "Bairro deve ter entre 3 e 50 caracteres"))]
    #[schema(example = "Centro")]
    pub bairro: String,

    #[validate(length(max = 100, message = "Ponto de referência não pode exceder 100 caracteres"))]
    #[schema(example = "Em frente à praça")]
    pub ponto_referencia: Option<String>,

    pub tipo_endereco: TipoEndereco,
}
