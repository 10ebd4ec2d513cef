// src/db/produto_estabelecimento_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::produto::ProdutoEstabelecimento};

// Listagens de preço por estabelecimento. O par (produto, estabelecimento)
// é único.
#[derive(Clone)]
pub struct ProdutoEstabelecimentoRepository;

impl ProdutoEstabelecimentoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        produto_id: Uuid,
        estabelecimento_id: Uuid,
        preco_unitario: Decimal,
        preco_promocional: Option<Decimal>,
        data_hora_inicio_promocao: Option<DateTime<Utc>>,
        data_hora_fim_promocao: Option<DateTime<Utc>>,
    ) -> Result<ProdutoEstabelecimento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, ProdutoEstabelecimento>(
            r#"
            INSERT INTO produtos_estabelecimento
                (produto_id, estabelecimento_id, preco_unitario, preco_promocional,
                 data_hora_inicio_promocao, data_hora_fim_promocao)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(produto_id)
        .bind(estabelecimento_id)
        .bind(preco_unitario)
        .bind(preco_promocional)
        .bind(data_hora_inicio_promocao)
        .bind(data_hora_fim_promocao)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateEntry(
                        "Produto já cadastrado neste estabelecimento".to_string(),
                    );
                }
            }
            e.into()
        })
    }

    /// Resolve uma listagem restrita ao estabelecimento informado. Um id
    /// válido globalmente mas de outro estabelecimento não é encontrado.
    pub async fn find_by_id_and_estabelecimento<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        estabelecimento_id: Uuid,
    ) -> Result<Option<ProdutoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let listagem = sqlx::query_as::<_, ProdutoEstabelecimento>(
            "SELECT * FROM produtos_estabelecimento WHERE id = $1 AND estabelecimento_id = $2",
        )
        .bind(id)
        .bind(estabelecimento_id)
        .fetch_optional(executor)
        .await?;

        Ok(listagem)
    }

    pub async fn find_by_estabelecimento<'e, E>(
        &self,
        executor: E,
        estabelecimento_id: Uuid,
    ) -> Result<Vec<ProdutoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let listagens = sqlx::query_as::<_, ProdutoEstabelecimento>(
            "SELECT * FROM produtos_estabelecimento WHERE estabelecimento_id = $1",
        )
        .bind(estabelecimento_id)
        .fetch_all(executor)
        .await?;

        Ok(listagens)
    }
}
