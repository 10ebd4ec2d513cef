// src/services/produto_service.rs

use std::collections::HashMap;

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CategoriaProdutoRepository, ProdutoRepository},
    models::produto::{CategoriaProduto, Produto, ProdutoResponse},
};

#[derive(Clone)]
pub struct ProdutoService {
    repo: ProdutoRepository,
    categoria_repo: CategoriaProdutoRepository,
}

impl ProdutoService {
    pub fn new(repo: ProdutoRepository, categoria_repo: CategoriaProdutoRepository) -> Self {
        Self {
            repo,
            categoria_repo,
        }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        descricao: &str,
        unidade: &str,
        categoria_id: Uuid,
    ) -> Result<ProdutoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Criando novo produto: {}", nome);

        let mut conn = executor.acquire().await?;

        let categoria = self
            .categoria_repo
            .find_by_id(&mut *conn, categoria_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Categoria não encontrada: {}", categoria_id);
                AppError::NotFound(format!("Categoria não encontrada com ID: {}", categoria_id))
            })?;

        let produto = self
            .repo
            .create(&mut *conn, nome, descricao, unidade, categoria_id)
            .await?;

        Ok(ProdutoResponse::montar(produto, categoria))
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<ProdutoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let produto = self
            .repo
            .find_by_id(&mut *conn, id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Produto não encontrado: {}", id);
                AppError::NotFound(format!("Produto não encontrado com ID: {}", id))
            })?;

        let categoria = self
            .categoria_repo
            .find_by_id(&mut *conn, produto.categoria_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Categoria não encontrada com ID: {}",
                    produto.categoria_id
                ))
            })?;

        Ok(ProdutoResponse::montar(produto, categoria))
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<ProdutoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let produtos = self.repo.find_all(&mut *conn).await?;
        self.montar_respostas(&mut *conn, produtos).await
    }

    pub async fn find_by_nome<'e, E>(
        &self,
        executor: E,
        nome: &str,
    ) -> Result<Vec<ProdutoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let produtos = self.repo.find_by_nome_contendo(&mut *conn, nome).await?;
        self.montar_respostas(&mut *conn, produtos).await
    }

    pub async fn find_by_categoria<'e, E>(
        &self,
        executor: E,
        categoria_id: Uuid,
    ) -> Result<Vec<ProdutoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        // Valida a categoria antes, para diferenciar "categoria inexistente"
        // de "categoria sem produtos"
        self.categoria_repo
            .find_by_id(&mut *conn, categoria_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Categoria não encontrada: {}", categoria_id);
                AppError::NotFound(format!("Categoria não encontrada com ID: {}", categoria_id))
            })?;

        let produtos = self
            .repo
            .find_by_categoria_id(&mut *conn, categoria_id)
            .await?;
        self.montar_respostas(&mut *conn, produtos).await
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        nome: &str,
        descricao: &str,
        unidade: &str,
        categoria_id: Uuid,
    ) -> Result<ProdutoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Atualizando produto com ID: {}", id);

        let mut conn = executor.acquire().await?;

        let categoria = self
            .categoria_repo
            .find_by_id(&mut *conn, categoria_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Categoria não encontrada com ID: {}", categoria_id))
            })?;

        let produto = self
            .repo
            .update(&mut *conn, id, nome, descricao, unidade, categoria_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Produto não encontrado com ID: {}", id)))?;

        Ok(ProdutoResponse::montar(produto, categoria))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Deletando produto com ID: {}", id);

        let removidos = self.repo.delete(executor, id).await?;
        if removidos == 0 {
            return Err(AppError::NotFound(format!(
                "Produto não encontrado com ID: {}",
                id
            )));
        }

        Ok(())
    }

    // Resolve as categorias de uma lista de produtos em uma única consulta.
    async fn montar_respostas(
        &self,
        conn: &mut sqlx::PgConnection,
        produtos: Vec<Produto>,
    ) -> Result<Vec<ProdutoResponse>, AppError> {
        let categorias: HashMap<Uuid, CategoriaProduto> = self
            .categoria_repo
            .find_all(&mut *conn)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        produtos
            .into_iter()
            .map(|p| {
                let categoria = categorias.get(&p.categoria_id).cloned().ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Categoria não encontrada com ID: {}",
                        p.categoria_id
                    ))
                })?;
                Ok(ProdutoResponse::montar(p, categoria))
            })
            .collect()
    }
}
