// src/services/estabelecimento_service.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, PgConnection, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        CategoriaProdutoRepository, EstabelecimentoRepository, ProdutoEstabelecimentoRepository,
        ProdutoRepository, RamoEstabelecimentoRepository,
    },
    models::{
        estabelecimento::{Estabelecimento, EstabelecimentoResponse},
        produto::{ProdutoEstabelecimentoResponse, ProdutoResponse},
    },
};

#[derive(Clone)]
pub struct EstabelecimentoService {
    repo: EstabelecimentoRepository,
    ramo_repo: RamoEstabelecimentoRepository,
    produto_repo: ProdutoRepository,
    listagem_repo: ProdutoEstabelecimentoRepository,
    categoria_repo: CategoriaProdutoRepository,
}

impl EstabelecimentoService {
    pub fn new(
        repo: EstabelecimentoRepository,
        ramo_repo: RamoEstabelecimentoRepository,
        produto_repo: ProdutoRepository,
        listagem_repo: ProdutoEstabelecimentoRepository,
        categoria_repo: CategoriaProdutoRepository,
    ) -> Self {
        Self {
            repo,
            ramo_repo,
            produto_repo,
            listagem_repo,
            categoria_repo,
        }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        cnpj: &str,
        telefone: &str,
        email: &str,
        ramo_id: Uuid,
    ) -> Result<EstabelecimentoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Criando novo estabelecimento: {}", nome);

        let mut conn = executor.acquire().await?;

        if self.repo.exists_by_cnpj(&mut *conn, cnpj).await? {
            tracing::warn!("CNPJ já cadastrado: {}", cnpj);
            return Err(AppError::DuplicateEntry(
                "CNPJ já cadastrado no sistema".to_string(),
            ));
        }

        let ramo = self
            .ramo_repo
            .find_by_id(&mut *conn, ramo_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Ramo não encontrado: {}", ramo_id);
                AppError::NotFound(format!("Ramo não encontrado com ID: {}", ramo_id))
            })?;

        let estabelecimento = self
            .repo
            .create(&mut *conn, nome, cnpj, telefone, email, ramo_id)
            .await?;

        tracing::info!("Estabelecimento criado com sucesso: {}", estabelecimento.id);

        Ok(EstabelecimentoResponse::montar(estabelecimento, ramo))
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<EstabelecimentoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let estabelecimento = self
            .repo
            .find_by_id(&mut *conn, id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Estabelecimento não encontrado: {}", id);
                AppError::NotFound(format!("Estabelecimento não encontrado com ID: {}", id))
            })?;

        self.montar_resposta(&mut *conn, estabelecimento).await
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<EstabelecimentoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let estabelecimentos = self.repo.find_all(&mut *conn).await?;
        self.montar_respostas(&mut *conn, estabelecimentos).await
    }

    pub async fn find_by_nome<'e, E>(
        &self,
        executor: E,
        nome: &str,
    ) -> Result<Vec<EstabelecimentoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let estabelecimentos = self.repo.find_by_nome_contendo(&mut *conn, nome).await?;
        self.montar_respostas(&mut *conn, estabelecimentos).await
    }

    pub async fn find_by_ramo<'e, E>(
        &self,
        executor: E,
        ramo_id: Uuid,
    ) -> Result<Vec<EstabelecimentoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        self.ramo_repo
            .find_by_id(&mut *conn, ramo_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Ramo não encontrado: {}", ramo_id);
                AppError::NotFound(format!("Ramo não encontrado com ID: {}", ramo_id))
            })?;

        let estabelecimentos = self.repo.find_by_ramo_id(&mut *conn, ramo_id).await?;
        self.montar_respostas(&mut *conn, estabelecimentos).await
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
    ) -> Result<EstabelecimentoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Atualizando estabelecimento com ID: {}", id);

        let mut conn = executor.acquire().await?;

        let atual = self.repo.find_by_id(&mut *conn, id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Estabelecimento não encontrado com ID: {}", id))
        })?;

        // Revalida o CNPJ apenas quando mudou
        if atual.cnpj != cnpj && self.repo.exists_by_cnpj(&mut *conn, cnpj).await? {
            return Err(AppError::DuplicateEntry(
                "CNPJ já cadastrado no sistema".to_string(),
            ));
        }

        let ramo = self
            .ramo_repo
            .find_by_id(&mut *conn, ramo_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ramo não encontrado com ID: {}", ramo_id)))?;

        let estabelecimento = self
            .repo
            .update(&mut *conn, id, nome, cnpj, telefone, email, ramo_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Estabelecimento não encontrado com ID: {}", id))
            })?;

        Ok(EstabelecimentoResponse::montar(estabelecimento, ramo))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        tracing::info!("Deletando estabelecimento com ID: {}", id);

        let removidos = self.repo.delete(executor, id).await?;
        if removidos == 0 {
            return Err(AppError::NotFound(format!(
                "Estabelecimento não encontrado com ID: {}",
                id
            )));
        }

        Ok(())
    }

    // --- LISTAGENS DE PREÇO ---

    pub async fn adicionar_produto<'e, E>(
        &self,
        executor: E,
        estabelecimento_id: Uuid,
        produto_id: Uuid,
        preco_unitario: Decimal,
        preco_promocional: Option<Decimal>,
        data_hora_inicio_promocao: Option<DateTime<Utc>>,
        data_hora_fim_promocao: Option<DateTime<Utc>>,
    ) -> Result<ProdutoEstabelecimentoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!(
            "Adicionando produto {} ao estabelecimento {}",
            produto_id,
            estabelecimento_id
        );

        let mut conn = executor.acquire().await?;

        self.repo
            .find_by_id(&mut *conn, estabelecimento_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Estabelecimento não encontrado com ID: {}",
                    estabelecimento_id
                ))
            })?;

        let produto = self
            .produto_repo
            .find_by_id(&mut *conn, produto_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Produto não encontrado com ID: {}", produto_id))
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

        let listagem = self
            .listagem_repo
            .create(
                &mut *conn,
                produto_id,
                estabelecimento_id,
                preco_unitario,
                preco_promocional,
                data_hora_inicio_promocao,
                data_hora_fim_promocao,
            )
            .await?;

        Ok(ProdutoEstabelecimentoResponse::montar(
            listagem,
            ProdutoResponse::montar(produto, categoria),
            Utc::now(),
        ))
    }

    /// Cardápio de um estabelecimento, com o estado de promoção calculado no
    /// momento da consulta.
    pub async fn listar_produtos<'e, E>(
        &self,
        executor: E,
        estabelecimento_id: Uuid,
    ) -> Result<Vec<ProdutoEstabelecimentoResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        self.repo
            .find_by_id(&mut *conn, estabelecimento_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Estabelecimento não encontrado com ID: {}",
                    estabelecimento_id
                ))
            })?;

        let listagens = self
            .listagem_repo
            .find_by_estabelecimento(&mut *conn, estabelecimento_id)
            .await?;

        let categorias: HashMap<_, _> = self
            .categoria_repo
            .find_all(&mut *conn)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let agora = Utc::now();
        let mut respostas = Vec::with_capacity(listagens.len());
        for listagem in listagens {
            let produto = self
                .produto_repo
                .find_by_id(&mut *conn, listagem.produto_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "Produto não encontrado com ID: {}",
                        listagem.produto_id
                    ))
                })?;

            let categoria = categorias.get(&produto.categoria_id).cloned().ok_or_else(|| {
                AppError::NotFound(format!(
                    "Categoria não encontrada com ID: {}",
                    produto.categoria_id
                ))
            })?;

            respostas.push(ProdutoEstabelecimentoResponse::montar(
                listagem,
                ProdutoResponse::montar(produto, categoria),
                agora,
            ));
        }

        Ok(respostas)
    }

    async fn montar_resposta(
        &self,
        conn: &mut PgConnection,
        estabelecimento: Estabelecimento,
    ) -> Result<EstabelecimentoResponse, AppError> {
        let ramo = self
            .ramo_repo
            .find_by_id(&mut *conn, estabelecimento.ramo_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Ramo não encontrado com ID: {}",
                    estabelecimento.ramo_id
                ))
            })?;

        Ok(EstabelecimentoResponse::montar(estabelecimento, ramo))
    }

    async fn montar_respostas(
        &self,
        conn: &mut PgConnection,
        estabelecimentos: Vec<Estabelecimento>,
    ) -> Result<Vec<EstabelecimentoResponse>, AppError> {
        let ramos: HashMap<_, _> = self
            .ramo_repo
            .find_all(&mut *conn)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        estabelecimentos
            .into_iter()
            .map(|e| {
                let ramo = ramos.get(&e.ramo_id).cloned().ok_or_else(|| {
                    AppError::NotFound(format!("Ramo não encontrado com ID: {}", e.ramo_id))
                })?;
                Ok(EstabelecimentoResponse::montar(e, ramo))
            })
            .collect()
    }
}
