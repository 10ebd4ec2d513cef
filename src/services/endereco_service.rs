// src/services/endereco_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::EnderecoRepository,
    models::endereco::{CreateEnderecoPayload, Endereco},
};

#[derive(Clone)]
pub struct EnderecoService {
    repo: EnderecoRepository,
}

impl EnderecoService {
    pub fn new(repo: EnderecoRepository) -> Self {
        Self { repo }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateEnderecoPayload,
    ) -> Result<Endereco, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Criando endereço em {} / {}", payload.cidade, payload.estado);

        self.repo
            .create(
                executor,
                &payload.rua,
                &payload.numero,
                payload.complemento.as_deref(),
                &payload.cidade,
                &payload.estado,
                &payload.cep,
                &payload.bairro,
                payload.ponto_referencia.as_deref(),
                payload.tipo_endereco,
            )
            .await
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Endereco, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await?.ok_or_else(|| {
            tracing::warn!("Endereço não encontrado: {}", id);
            AppError::NotFound(format!("Endereço não encontrado com ID: {}", id))
        })
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_all(executor).await
    }

    pub async fn find_by_cidade<'e, E>(
        &self,
        executor: E,
        cidade: &str,
    ) -> Result<Vec<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_cidade(executor, cidade).await
    }

    pub async fn find_by_cep<'e, E>(&self, executor: E, cep: &str) -> Result<Vec<Endereco>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_cep(executor, cep).await
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &CreateEnderecoPayload,
    ) -> Result<Endereco, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Atualizando endereço com ID: {}", id);

        self.repo
            .update(
                executor,
                id,
                &payload.rua,
                &payload.numero,
                payload.complemento.as_deref(),
                &payload.cidade,
                &payload.estado,
                &payload.cep,
                &payload.bairro,
                payload.ponto_referencia.as_deref(),
                payload.tipo_endereco,
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Endereço não encontrado com ID: {}", id)))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Deletando endereço com ID: {}", id);

        let removidos = self.repo.delete(executor, id).await?;
        if removidos == 0 {
            return Err(AppError::NotFound(format!(
                "Endereço não encontrado com ID: {}",
                id
            )));
        }

        Ok(())
    }
}
