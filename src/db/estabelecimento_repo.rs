// src/db/estabelecimento_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::estabelecimento::Estabelecimento};

#[derive(Clone)]
pub struct EstabelecimentoRepository;

impl EstabelecimentoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        cnpj: &str,
        telefone: &str,
        email: &str,
        ramo_id: Uuid,
    ) -> Result<Estabelecimento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Estabelecimento>(
            r#"
            INSERT INTO estabelecimentos (nome, cnpj, telefone, email, ramo_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(cnpj)
        .bind(telefone)
        .bind(email)
        .bind(ramo_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateEntry("CNPJ já cadastrado no sistema".to_string());
                }
            }
            e.into()
        })
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Estabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let estabelecimento =
            sqlx::query_as::<_, Estabelecimento>("SELECT * FROM estabelecimentos WHERE id = $1")
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(estabelecimento)
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<Estabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let estabelecimentos = sqlx::query_as::<_, Estabelecimento>(
            "SELECT * FROM estabelecimentos ORDER BY nome ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(estabelecimentos)
    }

    /// Busca por palavra-chave no nome, sem diferenciar maiúsculas.
    pub async fn find_by_nome_contendo<'e, E>(
        &self,
        executor: E,
        nome: &str,
    ) -> Result<Vec<Estabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let termo = format!("%{}%", nome);

        let estabelecimentos = sqlx::query_as::<_, Estabelecimento>(
            "SELECT * FROM estabelecimentos WHERE nome ILIKE $1 ORDER BY nome ASC",
        )
        .bind(termo)
        .fetch_all(executor)
        .await?;

        Ok(estabelecimentos)
    }

    pub async fn find_by_ramo_id<'e, E>(
        &self,
        executor: E,
        ramo_id: Uuid,
    ) -> Result<Vec<Estabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let estabelecimentos = sqlx::query_as::<_, Estabelecimento>(
            "SELECT * FROM estabelecimentos WHERE ramo_id = $1 ORDER BY nome ASC",
        )
        .bind(ramo_id)
        .fetch_all(executor)
        .await?;

        Ok(estabelecimentos)
    }

    pub async fn exists_by_cnpj<'e, E>(&self, executor: E, cnpj: &str) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM estabelecimentos WHERE cnpj = $1)")
                .bind(cnpj)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        cnpj: &str,
        telefone: &str,
        email: &str,
        ramo_id: Uuid,
    ) -> Result<Option<Estabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let estabelecimento = sqlx::query_as::<_, Estabelecimento>(
            r#"
            UPDATE estabelecimentos
            SET nome = $2, cnpj = $3, telefone = $4, email = $5, ramo_id = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(cnpj)
        .bind(telefone)
        .bind(email)
        .bind(ramo_id)
        .fetch_optional(executor)
        .await?;

        Ok(estabelecimento)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM estabelecimentos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
