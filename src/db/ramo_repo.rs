// src/db/ramo_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::estabelecimento::RamoEstabelecimento};

#[derive(Clone)]
pub struct RamoEstabelecimentoRepository;

impl RamoEstabelecimentoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<RamoEstabelecimento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ramo = sqlx::query_as::<_, RamoEstabelecimento>(
            "INSERT INTO ramos_estabelecimento (nome, descricao) VALUES ($1, $2) RETURNING *",
        )
        .bind(nome)
        .bind(descricao)
        .fetch_one(executor)
        .await?;

        Ok(ramo)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<RamoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ramo = sqlx::query_as::<_, RamoEstabelecimento>(
            "SELECT * FROM ramos_estabelecimento WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(ramo)
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<RamoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ramos = sqlx::query_as::<_, RamoEstabelecimento>(
            "SELECT * FROM ramos_estabelecimento ORDER BY nome ASC",
        )
        .fetch_all(executor)
        .await?;

        Ok(ramos)
    }

    /// Busca por palavra-chave no nome, sem diferenciar maiúsculas.
    pub async fn find_by_nome_contendo<'e, E>(
        &self,
        executor: E,
        nome: &str,
    ) -> Result<Vec<RamoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let termo = format!("%{}%", nome);

        let ramos = sqlx::query_as::<_, RamoEstabelecimento>(
            "SELECT * FROM ramos_estabelecimento WHERE nome ILIKE $1 ORDER BY nome ASC",
        )
        .bind(termo)
        .fetch_all(executor)
        .await?;

        Ok(ramos)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<Option<RamoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let ramo = sqlx::query_as::<_, RamoEstabelecimento>(
            "UPDATE ramos_estabelecimento SET nome = $2, descricao = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(nome)
        .bind(descricao)
        .fetch_optional(executor)
        .await?;

        Ok(ramo)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM ramos_estabelecimento WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
