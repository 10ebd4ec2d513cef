// src/services/cliente_service.rs

use sqlx::{Acquire, PgConnection, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClienteRepository, EnderecoRepository},
    models::{
        cliente::{Cliente, ClienteResponse},
        endereco::CreateEnderecoPayload,
    },
};

#[derive(Clone)]
pub struct ClienteService {
    repo: ClienteRepository,
    endereco_repo: EnderecoRepository,
}

impl ClienteService {
    pub fn new(repo: ClienteRepository, endereco_repo: EnderecoRepository) -> Self {
        Self {
            repo,
            endereco_repo,
        }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        nome: &str,
        email: &str,
        telefone: &str,
        documento_identificacao: &str,
        observacoes: Option<&str>,
        endereco: Option<&CreateEnderecoPayload>,
    ) -> Result<ClienteResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Criando novo cliente com email: {}", email);

        // Endereço e cliente nascem juntos ou nenhum dos dois
        let mut tx = executor.begin().await?;

        if self.repo.exists_by_email(&mut *tx, email).await? {
            tracing::warn!("Email já cadastrado: {}", email);
            return Err(AppError::DuplicateEntry(
                "Email já cadastrado no sistema".to_string(),
            ));
        }

        if self
            .repo
            .exists_by_documento(&mut *tx, documento_identificacao)
            .await?
        {
            tracing::warn!("Documento já cadastrado: {}", documento_identificacao);
            return Err(AppError::DuplicateEntry(
                "Documento de identidade já cadastrado".to_string(),
            ));
        }

        let endereco_salvo = match endereco {
            Some(payload) => Some(
                self.endereco_repo
                    .create(
                        &mut *tx,
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
                    .await?,
            ),
            None => None,
        };

        let cliente = self
            .repo
            .create(
                &mut *tx,
                nome,
                email,
                telefone,
                documento_identificacao,
                observacoes,
                endereco_salvo.as_ref().map(|e| e.id),
            )
            .await?;

        tx.commit().await?;
        tracing::info!("Cliente criado com sucesso: {}", cliente.id);

        Ok(ClienteResponse::montar(cliente, endereco_salvo))
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<ClienteResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let cliente = self.repo.find_by_id(&mut *conn, id).await?.ok_or_else(|| {
            tracing::warn!("Cliente não encontrado: {}", id);
            AppError::NotFound(format!("Cliente não encontrado com ID: {}", id))
        })?;

        self.montar_resposta(&mut *conn, cliente).await
    }

    pub async fn find_all<'e, E>(&self, executor: E) -> Result<Vec<ClienteResponse>, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let clientes = self.repo.find_all(&mut *conn).await?;

        let mut respostas = Vec::with_capacity(clientes.len());
        for cliente in clientes {
            respostas.push(self.montar_resposta(&mut *conn, cliente).await?);
        }

        Ok(respostas)
    }

    pub async fn find_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<ClienteResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let cliente = self
            .repo
            .find_by_email(&mut *conn, email)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Cliente não encontrado com email: {}", email);
                AppError::NotFound(format!("Cliente não encontrado com email: {}", email))
            })?;

        self.montar_resposta(&mut *conn, cliente).await
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
    ) -> Result<ClienteResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Atualizando cliente com ID: {}", id);

        let mut conn = executor.acquire().await?;

        let atual = self.repo.find_by_id(&mut *conn, id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Cliente não encontrado com ID: {}", id))
        })?;

        // Revalida a unicidade apenas quando o valor mudou, para aceitar
        // reenvio idempotente dos mesmos dados
        if !atual.email.eq_ignore_ascii_case(email)
            && self.repo.exists_by_email(&mut *conn, email).await?
        {
            return Err(AppError::DuplicateEntry(
                "Email já cadastrado no sistema".to_string(),
            ));
        }

        if atual.documento_identificacao != documento_identificacao
            && self
                .repo
                .exists_by_documento(&mut *conn, documento_identificacao)
                .await?
        {
            return Err(AppError::DuplicateEntry(
                "Documento de identidade já cadastrado".to_string(),
            ));
        }

        let cliente = self
            .repo
            .update(
                &mut *conn,
                id,
                nome,
                email,
                telefone,
                documento_identificacao,
                observacoes,
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente não encontrado com ID: {}", id)))?;

        tracing::info!("Cliente atualizado com sucesso: {}", id);

        self.montar_resposta(&mut *conn, cliente).await
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Deletando cliente com ID: {}", id);

        // O endereço próprio do cliente sai junto, na mesma transação
        let mut tx = executor.begin().await?;

        let cliente = self.repo.find_by_id(&mut *tx, id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Cliente não encontrado com ID: {}", id))
        })?;

        self.repo.delete(&mut *tx, id).await?;

        if let Some(endereco_id) = cliente.endereco_id {
            self.endereco_repo.delete(&mut *tx, endereco_id).await?;
        }

        tx.commit().await?;
        tracing::info!("Cliente deletado com sucesso: {}", id);

        Ok(())
    }

    async fn montar_resposta(
        &self,
        conn: &mut PgConnection,
        cliente: Cliente,
    ) -> Result<ClienteResponse, AppError> {
        let endereco = match cliente.endereco_id {
            Some(endereco_id) => self.endereco_repo.find_by_id(&mut *conn, endereco_id).await?,
            None => None,
        };

        Ok(ClienteResponse::montar(cliente, endereco))
    }
}
