// src/services/ramo_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError, db::RamoEstabelecimentoRepository,
    models::estabelecimento::RamoEstabelecimento,
};

#[derive(Clone)]
pub struct RamoEstabelecimentoService {
    repo: RamoEstabelecimentoRepository,
}

impl RamoEstabelecimentoService {
    pub fn new(repo: RamoEstabelecimentoRepository) -> Self {
        Self { repo }
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
        tracing::info!("Criando novo ramo: {}", nome);

        self.repo.create(executor, nome, descricao).await
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<RamoEstabelecimento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await?.ok_or_else(|| {
            tracing::warn!("Ramo não encontrado: {}", id);
            AppError::NotFound(format!("Ramo não encontrado com ID: {}", id))
        })
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<RamoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_all(executor).await
    }

    pub async fn find_by_nome<'e, E>(
        &self,
        executor: E,
        nome: &str,
    ) -> Result<Vec<RamoEstabelecimento>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_nome_contendo(executor, nome).await
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<RamoEstabelecimento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Atualizando ramo com ID: {}", id);

        self.repo
            .update(executor, id, nome, descricao)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ramo não encontrado com ID: {}", id)))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Deletando ramo com ID: {}", id);

        let removidos = self.repo.delete(executor, id).await?;
        if removidos == 0 {
            return Err(AppError::NotFound(format!(
                "Ramo não encontrado com ID: {}",
                id
            )));
        }

        Ok(())
    }
}
