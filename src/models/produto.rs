// src/models/produto.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaProduto {
    pub id: Uuid,

    #[schema(example = "Pizzas Salgadas")]
    pub categoria: String,

    #[schema(example = "Pizzas tradicionais e especiais")]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,

    // Unidade de venda: dúzia, kg, unidade...
    pub unidade: String,
    pub categoria_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoResponse {
    pub id: Uuid,

    #[schema(example = "Pizza Margherita")]
    pub nome: String,

    #[schema(example = "Molho de tomate, muçarela e manjericão")]
    pub descricao: String,

    #[schema(example = "unidade")]
    pub unidade: String,

    pub categoria: CategoriaProduto,
}

impl ProdutoResponse {
    pub fn montar(produto: Produto, categoria: CategoriaProduto) -> Self {
        Self {
            id: produto.id,
            nome: produto.nome,
            descricao: produto.descricao,
            unidade: produto.unidade,
            categoria,
        }
    }
}

// Listagem de preço de um produto em um estabelecimento.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoEstabelecimento {
    pub id: Uuid,
    pub produto_id: Uuid,
    pub estabelecimento_id: Uuid,
    pub preco_unitario: Decimal,
    pub preco_promocional: Option<Decimal>,
    pub data_hora_inicio_promocao: Option<DateTime<Utc>>,
    pub data_hora_fim_promocao: Option<DateTime<Utc>>,
}

impl ProdutoEstabelecimento {
    /// Uma listagem está em promoção quando tem preço promocional e a janela
    /// está configurada com `agora` estritamente dentro dela.
    pub fn em_promocao(&self, agora: DateTime<Utc>) -> bool {
        if self.preco_promocional.is_none() {
            return false;
        }
        match (self.data_hora_inicio_promocao, self.data_hora_fim_promocao) {
            (Some(inicio), Some(fim)) => agora > inicio && agora < fim,
            _ => false,
        }
    }

    /// Preço efetivo no instante `agora`: promocional quando vigente,
    /// unitário caso contrário.
    pub fn preco_vigente(&self, agora: DateTime<Utc>) -> (Decimal, bool) {
        if self.em_promocao(agora) {
            // em_promocao garante que o preço promocional existe
            (self.preco_promocional.unwrap_or(self.preco_unitario), true)
        } else {
            (self.preco_unitario, false)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoEstabelecimentoResponse {
    pub id: Uuid,

    pub produto: ProdutoResponse,

    pub estabelecimento_id: Uuid,

    #[schema(example = "10.00")]
    pub preco_unitario: Decimal,

    #[schema(example = "8.00")]
    pub preco_promocional: Option<Decimal>,

    pub data_hora_inicio_promocao: Option<DateTime<Utc>>,
    pub data_hora_fim_promocao: Option<DateTime<Utc>>,

    /// Calculado no momento da consulta.
    pub em_promocao: bool,
}

impl ProdutoEstabelecimentoResponse {
    pub fn montar(
        listagem: ProdutoEstabelecimento,
        produto: ProdutoResponse,
        agora: DateTime<Utc>,
    ) -> Self {
        let em_promocao = listagem.em_promocao(agora);
        Self {
            id: listagem.id,
            produto,
            estabelecimento_id: listagem.estabelecimento_id,
            preco_unitario: listagem.preco_unitario,
            preco_promocional: listagem.preco_promocional,
            data_hora_inicio_promocao: listagem.data_hora_inicio_promocao,
            data_hora_fim_promocao: listagem.data_hora_fim_promocao,
            em_promocao,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn listagem(
        preco_promocional: Option<Decimal>,
        inicio: Option<DateTime<Utc>>,
        fim: Option<DateTime<Utc>>,
    ) -> ProdutoEstabelecimento {
        ProdutoEstabelecimento {
            id: Uuid::new_v4(),
            produto_id: Uuid::new_v4(),
            estabelecimento_id: Uuid::new_v4(),
            preco_unitario: Decimal::new(1000, 2),
            preco_promocional,
            data_hora_inicio_promocao: inicio,
            data_hora_fim_promocao: fim,
        }
    }

    #[test]
    fn promocao_vigente_usa_preco_promocional() {
        let agora = Utc::now();
        let l = listagem(
            Some(Decimal::new(800, 2)),
            Some(agora - Duration::hours(1)),
            Some(agora + Duration::hours(1)),
        );
        assert!(l.em_promocao(agora));

        let (valor_unitario, em_promocao) = l.preco_vigente(agora);
        assert_eq!(valor_unitario, Decimal::new(800, 2));
        assert!(em_promocao);

        // 3 unidades a 8.00 promocionais: total do item de 24.00
        assert_eq!(valor_unitario * Decimal::from(3), Decimal::new(2400, 2));
    }

    #[test]
    fn fora_da_janela_usa_preco_unitario() {
        let agora = Utc::now();
        let l = listagem(
            Some(Decimal::new(800, 2)),
            Some(agora - Duration::hours(3)),
            Some(agora - Duration::hours(1)),
        );
        assert!(!l.em_promocao(agora));
        assert_eq!(l.preco_vigente(agora), (Decimal::new(1000, 2), false));
    }

    #[test]
    fn sem_preco_promocional_nunca_esta_em_promocao() {
        let agora = Utc::now();
        let l = listagem(
            None,
            Some(agora - Duration::hours(1)),
            Some(agora + Duration::hours(1)),
        );
        assert!(!l.em_promocao(agora));
    }

    #[test]
    fn janela_incompleta_nao_conta_como_promocao() {
        let agora = Utc::now();
        let so_inicio = listagem(
            Some(Decimal::new(800, 2)),
            Some(agora - Duration::hours(1)),
            None,
        );
        let so_fim = listagem(
            Some(Decimal::new(800, 2)),
            None,
            Some(agora + Duration::hours(1)),
        );
        assert!(!so_inicio.em_promocao(agora));
        assert!(!so_fim.em_promocao(agora));
    }

    #[test]
    fn limites_da_janela_sao_estritos() {
        let agora = Utc::now();
        let l = listagem(Some(Decimal::new(800, 2)), Some(agora), Some(agora));
        assert!(!l.em_promocao(agora));
    }
}
