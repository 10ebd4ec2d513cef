// src/db/endereco_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::endereco::{Endereco, TipoEndereco},
};

#[derive(Clone)]
pub struct EnderecoRepository;

impl EnderecoRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        rua: &str,
        numero: &str,
        complemento: Option<&str>,
        cidade: &str,
        estado: &str,
        cep: &str,
        bairro: &str,
        ponto_referencia: Option<&str>,
        tipo_endereco: TipoEndereco,
    ) -> Result<Endereco, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let endereco = sqlx::query_as::<_, Endereco>(
            r#"
            INSERT INTO enderecos (rua, numero, complemento, cidade, estado, cep, bairro, ponto_referencia, tipo_endereco)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(rua)
        .bind(numero)
        .bind(complemento)
        .bind(cidade)
        .bind(estado)
        .bind(cep)
        .bind(bairro)
        .bind(ponto_referencia)
        .bind(tipo_endereco)
        .fetch_one(executor)
        .await?;

        Ok(endereco)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let endereco = sqlx::query_as::<_, Endereco>("SELECT * FROM enderecos WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(endereco)
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let enderecos =
            sqlx::query_as::<_, Endereco>("SELECT * FROM enderecos ORDER BY cidade, rua")
                .fetch_all(executor)
                .await?;

        Ok(enderecos)
    }

    pub async fn find_by_cidade<'e, E>(
        &self,
        executor: E,
        cidade: &str,
    ) -> Result<Vec<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let enderecos = sqlx::query_as::<_, Endereco>(
            "SELECT * FROM enderecos WHERE LOWER(cidade) = LOWER($1) ORDER BY rua",
        )
        .bind(cidade)
        .fetch_all(executor)
        .await?;

        Ok(enderecos)
    }

    pub async fn find_by_cep<'e, E>(&self, executor: E, cep: &str) -> Result<Vec<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Compara ignorando o hífen, para aceitar os dois formatos de CEP
        let enderecos = sqlx::query_as::<_, Endereco>(
            "SELECT * FROM enderecos WHERE REPLACE(cep, '-', '') = REPLACE($1, '-', '')",
        )
        .bind(cep)
        .fetch_all(executor)
        .await?;

        Ok(enderecos)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        rua: &str,
        numero: &str,
        complemento: Option<&str>,
        cidade: &str,
        estado: &str,
        cep: &str,
        bairro: &str,
        ponto_referencia: Option<&str>,
        tipo_endereco: TipoEndereco,
    ) -> Result<Option<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let endereco = sqlx::query_as::<_, Endereco>(
            r#"
            UPDATE enderecos
            SET rua = $2, numero = $3, complemento = $4, cidade = $5, estado = $6,
                cep = $7, bairro = $8, ponto_referencia = $9, tipo_endereco = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(rua)
        .bind(numero)
        .bind(complemento)
        .bind(cidade)
        .bind(estado)
        .bind(cep)
        .bind(bairro)
        .bind(ponto_referencia)
        .bind(tipo_endereco)
        .fetch_optional(executor)
        .await?;

        Ok(endereco)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM enderecos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
