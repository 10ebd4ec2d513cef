// src/models/pedido.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    cliente::ClienteResponse, endereco::Endereco, estabelecimento::EstabelecimentoResponse,
};

/// Status inicial de todo pedido.
pub const STATUS_PENDENTE: &str = "PENDENTE";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPedidoPayload {
    pub produto_estabelecimento_id: Uuid,

    #[validate(range(min = 1, message = "Quantidade deve ser maior que zero"))]
    #[schema(example = 3)]
    pub quantidade: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePedidoPayload {
    pub cliente_id: Uuid,
    pub estabelecimento_id: Uuid,
    pub endereco_id: Uuid,

    #[validate(length(min = 1, message = "Pedido deve ter pelo menos 1 item"), nested)]
    pub itens: Vec<ItemPedidoPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub estabelecimento_id: Uuid,
    pub endereco_id: Uuid,
    pub numero_pedido: String,
    pub status: String,
    pub valor_total: Decimal,
    pub data_pedido: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ItemPedido {
    pub id: Uuid,
    pub pedido_id: Uuid,
    pub produto_estabelecimento_id: Uuid,
    pub quantidade: i32,

    // Fotografia do preço no momento da compra
    pub valor_unitario: Decimal,
    pub valor_total: Decimal,
    pub em_promocao: bool,
}

// Linha do join itens_pedido -> produtos_estabelecimento -> produtos,
// usada para montar respostas e o histórico sem N+1 por pedido.
#[derive(Debug, Clone, FromRow)]
pub struct ItemPedidoDetalhe {
    pub id: Uuid,
    pub pedido_id: Uuid,
    pub produto_id: Uuid,
    pub nome_produto: String,
    pub descricao_produto: String,
    pub quantidade: i32,
    pub valor_unitario: Decimal,
    pub valor_total: Decimal,
    pub em_promocao: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPedidoResponse {
    pub id: Uuid,

    pub produto_id: Uuid,

    #[schema(example = "Pizza Margherita")]
    pub nome_produto: String,

    #[schema(example = 3)]
    pub quantidade: i32,

    #[schema(example = "8.00")]
    pub valor_unitario: Decimal,

    #[schema(example = "24.00")]
    pub valor_total: Decimal,

    /// Indica se o item estava em promoção no momento da compra.
    pub em_promocao: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PedidoResponse {
    pub id: Uuid,

    pub cliente: ClienteResponse,
    pub estabelecimento: EstabelecimentoResponse,
    pub endereco: Endereco,

    #[schema(example = "202608-0f3a1")]
    pub numero_pedido: String,

    #[schema(example = "PENDENTE")]
    pub status: String,

    #[schema(example = "24.00")]
    pub valor_total: Decimal,

    pub itens: Vec<ItemPedidoResponse>,

    pub data_pedido: DateTime<Utc>,
}

// --- Histórico de consumo ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemHistorico {
    pub id: Uuid,
    pub produto_id: Uuid,

    #[schema(example = "Pizza Margherita")]
    pub nome_produto: String,

    #[schema(example = "Molho de tomate, muçarela e manjericão")]
    pub descricao_produto: String,

    pub quantidade: i32,
    pub valor_unitario: Decimal,
    pub valor_total: Decimal,
    pub em_promocao: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PedidoHistorico {
    pub id: Uuid,

    #[schema(example = "202608-0f3a1")]
    pub numero_pedido: String,

    pub data_pedido: DateTime<Utc>,

    #[schema(example = "PENDENTE")]
    pub status: String,

    pub valor_total: Decimal,

    pub itens: Vec<ItemHistorico>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoMaisPedido {
    pub produto_id: Uuid,

    #[schema(example = "Pizza Margherita")]
    pub nome_produto: String,

    /// Em quantos itens de pedido o produto apareceu na janela analisada.
    #[schema(example = 4)]
    pub total_vezes_pedido: i32,

    /// Soma das quantidades pedidas na janela analisada.
    #[schema(example = 9)]
    pub total_unidades_pedidas: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoClienteResponse {
    pub cliente_id: Uuid,

    #[schema(example = "Maria da Silva")]
    pub nome_cliente: String,

    #[schema(example = "12345678900")]
    pub documento_identificacao: String,

    #[schema(example = "maria@email.com")]
    pub email: String,

    #[schema(example = "(41) 99999-1234")]
    pub telefone: String,

    /// Os 3 produtos mais pedidos nos últimos 10 pedidos.
    pub top_produtos: Vec<ProdutoMaisPedido>,

    /// Histórico completo, do mais recente ao mais antigo.
    pub historico_pedidos: Vec<PedidoHistorico>,
}
