// src/db/pedido_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pedido::{ItemPedido, ItemPedidoDetalhe, Pedido},
};

#[derive(Clone)]
pub struct PedidoRepository;

impl PedidoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        cliente_id: Uuid,
        estabelecimento_id: Uuid,
        endereco_id: Uuid,
        numero_pedido: &str,
        status: &str,
        valor_total: Decimal,
        data_pedido: DateTime<Utc>,
    ) -> Result<Pedido, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Pedido>(
            r#"
            INSERT INTO pedidos
                (cliente_id, estabelecimento_id, endereco_id, numero_pedido, status, valor_total, data_pedido)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(cliente_id)
        .bind(estabelecimento_id)
        .bind(endereco_id)
        .bind(numero_pedido)
        .bind(status)
        .bind(valor_total)
        .bind(data_pedido)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // Colisão do código aleatório do número do pedido (raríssima):
            // a restrição única aborta a transação em vez de corromper buscas.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateEntry(format!(
                        "Número de pedido '{}' já existe, tente novamente",
                        numero_pedido
                    ));
                }
            }
            e.into()
        })
    }

    pub async fn add_item<'e, E>(
        &self,
        executor: E,
        pedido_id: Uuid,
        produto_estabelecimento_id: Uuid,
        quantidade: i32,
        valor_unitario: Decimal,
        valor_total: Decimal,
        em_promocao: bool,
    ) -> Result<ItemPedido, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, ItemPedido>(
            r#"
            INSERT INTO itens_pedido
                (pedido_id, produto_estabelecimento_id, quantidade, valor_unitario, valor_total, em_promocao)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(pedido_id)
        .bind(produto_estabelecimento_id)
        .bind(quantidade)
        .bind(valor_unitario)
        .bind(valor_total)
        .bind(em_promocao)
        .fetch_one(executor)
        .await?;

        Ok(item)
    }

    pub async fn find_by_numero_pedido<'e, E>(
        &self,
        executor: E,
        numero_pedido: &str,
    ) -> Result<Option<Pedido>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pedido = sqlx::query_as::<_, Pedido>("SELECT * FROM pedidos WHERE numero_pedido = $1")
            .bind(numero_pedido)
            .fetch_optional(executor)
            .await?;

        Ok(pedido)
    }

    /// Todos os pedidos de um cliente, do mais recente ao mais antigo.
    pub async fn find_by_cliente_id<'e, E>(
        &self,
        executor: E,
        cliente_id: Uuid,
    ) -> Result<Vec<Pedido>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pedidos = sqlx::query_as::<_, Pedido>(
            "SELECT * FROM pedidos WHERE cliente_id = $1 ORDER BY data_pedido DESC",
        )
        .bind(cliente_id)
        .fetch_all(executor)
        .await?;

        Ok(pedidos)
    }

    /// Todos os pedidos de um cliente localizado pelo documento, do mais
    /// recente ao mais antigo.
    pub async fn find_by_cliente_documento<'e, E>(
        &self,
        executor: E,
        documento: &str,
    ) -> Result<Vec<Pedido>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let pedidos = sqlx::query_as::<_, Pedido>(
            r#"
            SELECT p.*
            FROM pedidos p
            INNER JOIN clientes c ON c.id = p.cliente_id
            WHERE c.documento_identificacao = $1
            ORDER BY p.data_pedido DESC
            "#,
        )
        .bind(documento)
        .fetch_all(executor)
        .await?;

        Ok(pedidos)
    }

    /// Itens de um conjunto de pedidos com os dados do produto já juntados,
    /// em uma única consulta.
    pub async fn itens_detalhados<'e, E>(
        &self,
        executor: E,
        pedido_ids: &[Uuid],
    ) -> Result<Vec<ItemPedidoDetalhe>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let itens = sqlx::query_as::<_, ItemPedidoDetalhe>(
            r#"
            SELECT
                i.id, i.pedido_id,
                pr.id AS produto_id, pr.nome AS nome_produto, pr.descricao AS descricao_produto,
                i.quantidade, i.valor_unitario, i.valor_total, i.em_promocao
            FROM itens_pedido i
            INNER JOIN produtos_estabelecimento pe ON pe.id = i.produto_estabelecimento_id
            INNER JOIN produtos pr ON pr.id = pe.produto_id
            WHERE i.pedido_id = ANY($1)
            "#,
        )
        .bind(pedido_ids)
        .fetch_all(executor)
        .await?;

        Ok(itens)
    }
}
