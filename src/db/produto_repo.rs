// src/db/produto_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::produto::Produto};

#[derive(Clone)]
pub struct ProdutoRepository;

impl ProdutoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        descricao: &str,
        unidade: &str,
        categoria_id: Uuid,
    ) -> Result<Produto, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produto = sqlx::query_as::<_, Produto>(
            r#"
            INSERT INTO produtos (nome, descricao, unidade, categoria_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(descricao)
        .bind(unidade)
        .bind(categoria_id)
        .fetch_one(executor)
        .await?;

        Ok(produto)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Produto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produto = sqlx::query_as::<_, Produto>("SELECT * FROM produtos WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(produto)
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<Produto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produtos = sqlx::query_as::<_, Produto>("SELECT * FROM produtos ORDER BY nome ASC")
            .fetch_all(executor)
            .await?;

        Ok(produtos)
    }

    /// Busca por palavra-chave no nome, sem diferenciar maiúsculas.
    pub async fn find_by_nome_contendo<'e, E>(
        &self,
        executor: E,
        nome: &str,
    ) -> Result<Vec<Produto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let termo = format!("%{}%", nome);

        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos WHERE nome ILIKE $1 ORDER BY nome ASC",
        )
        .bind(termo)
        .fetch_all(executor)
        .await?;

        Ok(produtos)
    }

    pub async fn find_by_categoria_id<'e, E>(
        &self,
        executor: E,
        categoria_id: Uuid,
    ) -> Result<Vec<Produto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produtos = sqlx::query_as::<_, Produto>(
            "SELECT * FROM produtos WHERE categoria_id = $1 ORDER BY nome ASC",
        )
        .bind(categoria_id)
        .fetch_all(executor)
        .await?;

        Ok(produtos)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        descricao: &str,
        unidade: &str,
        categoria_id: Uuid,
    ) -> Result<Option<Produto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let produto = sqlx::query_as::<_, Produto>(
            r#"
            UPDATE produtos
            SET nome = $2, descricao = $3, unidade = $4, categoria_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(descricao)
        .bind(unidade)
        .bind(categoria_id)
        .fetch_optional(executor)
        .await?;

        Ok(produto)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
