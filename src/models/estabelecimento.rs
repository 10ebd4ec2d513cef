// src/models/estabelecimento.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Ramo de atuação (pizzaria, farmácia, mercado...). Registro e resposta
// têm a mesma forma.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RamoEstabelecimento {
    pub id: Uuid,

    #[schema(example = "Pizzaria")]
    pub nome: String,

    #[schema(example = "Estabelecimentos especializados em pizzas")]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Estabelecimento {
    pub id: Uuid,
    pub nome: String,
    pub cnpj: String,
    pub telefone: String,
    pub email: String,
    pub ramo_id: Uuid,
}

// Resposta com o ramo embutido no lugar da FK.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstabelecimentoResponse {
    pub id: Uuid,

    #[schema(example = "Pizzaria do Bairro")]
    pub nome: String,

    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,

    #[schema(example = "(41) 3333-4444")]
    pub telefone: String,

    #[schema(example = "contato@pizzariadobairro.com.br")]
    pub email: String,

    pub ramo: RamoEstabelecimento,
}

impl EstabelecimentoResponse {
    pub fn montar(estabelecimento: Estabelecimento, ramo: RamoEstabelecimento) -> Self {
        Self {
            id: estabelecimento.id,
            nome: estabelecimento.nome,
            cnpj: estabelecimento.cnpj,
            telefone: estabelecimento.telefone,
            email: estabelecimento.email,
            ramo,
        }
    }
}
