// src/db/cliente_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::cliente::Cliente};

// O repositório de clientes, responsável por todas as interações com a
// tabela 'clientes'. Os métodos recebem o executor para poderem participar
// de transações abertas pelo serviço.
#[derive(Clone)]
pub struct ClienteRepository;

impl ClienteRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        email: &str,
        telefone: &str,
        documento_identificacao: &str,
        observacoes: Option<&str>,
        endereco_id: Option<Uuid>,
    ) -> Result<Cliente, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nome, email, telefone, documento_identificacao, observacoes, endereco_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(email)
        .bind(telefone)
        .bind(documento_identificacao)
        .bind(observacoes)
        .bind(endereco_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // Converte violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateEntry(
                        "Email ou documento já cadastrado no sistema".to_string(),
                    );
                }
            }
            e.into()
        })
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Cliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(cliente)
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<Cliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let clientes = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY nome ASC")
            .fetch_all(executor)
            .await?;

        Ok(clientes)
    }

    pub async fn find_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<Cliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cliente =
            sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(executor)
                .await?;

        Ok(cliente)
    }

    pub async fn find_by_documento<'e, E>(
        &self,
        executor: E,
        documento: &str,
    ) -> Result<Option<Cliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cliente = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE documento_identificacao = $1",
        )
        .bind(documento)
        .fetch_optional(executor)
        .await?;

        Ok(cliente)
    }

    pub async fn exists_by_email<'e, E>(&self, executor: E, email: &str) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM clientes WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn exists_by_documento<'e, E>(
        &self,
        executor: E,
        documento: &str,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM clientes WHERE documento_identificacao = $1)",
        )
        .bind(documento)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        email: &str,
        telefone: &str,
        documento_identificacao: &str,
        observacoes: Option<&str>,
    ) -> Result<Option<Cliente>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome = $2, email = $3, telefone = $4, documento_identificacao = $5, observacoes = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(email)
        .bind(telefone)
        .bind(documento_identificacao)
        .bind(observacoes)
        .fetch_optional(executor)
        .await?;

        Ok(cliente)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
