// src/services/categoria_produto_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError, db::CategoriaProdutoRepository, models::produto::CategoriaProduto,
};

#[derive(Clone)]
pub struct CategoriaProdutoService {
    repo: CategoriaProdutoRepository,
}

impl CategoriaProdutoService {
    pub fn new(repo: CategoriaProdutoRepository) -> Self {
        Self { repo }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        categoria: &str,
        descricao: Option<&str>,
    ) -> Result<CategoriaProduto, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Criando nova categoria de produto: {}", categoria);

        let mut conn = executor.acquire().await?;

        if self.repo.exists_by_categoria(&mut *conn, categoria).await? {
            tracing::warn!("Categoria já cadastrada: {}", categoria);
            return Err(AppError::DuplicateEntry(
                "Categoria já cadastrada no sistema".to_string(),
            ));
        }

        self.repo.create(&mut *conn, categoria, descricao).await
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<CategoriaProduto, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await?.ok_or_else(|| {
            tracing::warn!("Categoria não encontrada: {}", id);
            AppError::NotFound(format!("Categoria não encontrada com ID: {}", id))
        })
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<CategoriaProduto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_all(executor).await
    }

    pub async fn find_by_categoria<'e, E>(
        &self,
        executor: E,
        categoria: &str,
    ) -> Result<Vec<CategoriaProduto>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_categoria(executor, categoria).await
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        categoria: &str,
        descricao: Option<&str>,
    ) -> Result<CategoriaProduto, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Atualizando categoria com ID: {}", id);

        let mut conn = executor.acquire().await?;

        let atual = self
            .repo
            .find_by_id(&mut *conn, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Categoria não encontrada com ID: {}", id)))?;

        // Revalida o nome apenas quando mudou, para aceitar reenvio idempotente
        if !atual.categoria.eq_ignore_ascii_case(categoria)
            && self.repo.exists_by_categoria(&mut *conn, categoria).await?
        {
            return Err(AppError::DuplicateEntry(
                "Categoria já cadastrada no sistema".to_string(),
            ));
        }

        self.repo
            .update(&mut *conn, id, categoria, descricao)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Categoria não encontrada com ID: {}", id)))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Deletando categoria com ID: {}", id);

        let removidos = self.repo.delete(executor, id).await?;
        if removidos == 0 {
            return Err(AppError::NotFound(format!(
                "Categoria não encontrada com ID: {}",
                id
            )));
        }

        Ok(())
    }
}
