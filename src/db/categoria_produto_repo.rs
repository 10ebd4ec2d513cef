// src/db/categoria_produto_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::produto::CategoriaProduto};

#[derive(Clone)]
pub struct CategoriaProdutoRepository;

impl CategoriaProdutoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        categoria: &str,
        descricao: Option<&str>,
    ) -> Result<CategoriaProduto, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let registro = sqlx::query_as::<_, CategoriaProduto>(
            "INSERT INTO categorias_produto (categoria, descricao) VALUES ($1, $2) RETURNING *",
        )
        .bind(categoria)
        .bind(descricao)
        .fetch_one(executor)
        .await?;

        Ok(registro)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<CategoriaProduto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categoria =
            sqlx::query_as::<_, CategoriaProduto>("SELECT * FROM categorias_produto WHERE id = $1")
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(categoria)
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<CategoriaProduto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categorias = sqlx::query_as::<_, CategoriaProduto>(
            "SELECT * FROM categorias_produto ORDER BY categoria ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(categorias)
    }

    /// Busca exata pelo nome da categoria, sem diferenciar maiúsculas.
    pub async fn find_by_categoria<'e, E>(
        &self,
        executor: E,
        categoria: &str,
    ) -> Result<Vec<CategoriaProduto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let categorias = sqlx::query_as::<_, CategoriaProduto>(
            "SELECT * FROM categorias_produto WHERE LOWER(categoria) = LOWER($1)",
        )
        .bind(categoria)
        .fetch_all(executor)
        .await?;

        Ok(categorias)
    }

    pub async fn exists_by_categoria<'e, E>(
        &self,
        executor: E,
        categoria: &str,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM categorias_produto WHERE LOWER(categoria) = LOWER($1))",
        )
        .bind(categoria)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        categoria: &str,
        descricao: Option<&str>,
    ) -> Result<Option<CategoriaProduto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let registro = sqlx::query_as::<_, CategoriaProduto>(
            "UPDATE categorias_produto SET categoria = $2, descricao = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(categoria)
        .bind(descricao)
        .fetch_optional(executor)
        .await?;

        Ok(registro)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM categorias_produto WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
