// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CategoriaProdutoRepository, ClienteRepository, EnderecoRepository,
        EstabelecimentoRepository, PedidoRepository, ProdutoEstabelecimentoRepository,
        ProdutoRepository, RamoEstabelecimentoRepository,
    },
    services::{
        CategoriaProdutoService, ClienteService, EnderecoService, EstabelecimentoService,
        PedidoService, ProdutoService, RamoEstabelecimentoService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub cliente_service: ClienteService,
    pub endereco_service: EnderecoService,
    pub ramo_service: RamoEstabelecimentoService,
    pub categoria_produto_service: CategoriaProdutoService,
    pub produto_service: ProdutoService,
    pub estabelecimento_service: EstabelecimentoService,
    pub pedido_service: PedidoService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let cliente_repo = ClienteRepository::new();
        let endereco_repo = EnderecoRepository::new();
        let ramo_repo = RamoEstabelecimentoRepository::new();
        let categoria_repo = CategoriaProdutoRepository::new();
        let produto_repo = ProdutoRepository::new();
        let estabelecimento_repo = EstabelecimentoRepository::new();
        let listagem_repo = ProdutoEstabelecimentoRepository::new();
        let pedido_repo = PedidoRepository::new();

        let cliente_service = ClienteService::new(cliente_repo.clone(), endereco_repo.clone());
        let endereco_service = EnderecoService::new(endereco_repo.clone());
        let ramo_service = RamoEstabelecimentoService::new(ramo_repo.clone());
        let categoria_produto_service = CategoriaProdutoService::new(categoria_repo.clone());
        let produto_service = ProdutoService::new(produto_repo.clone(), categoria_repo.clone());
        let estabelecimento_service = EstabelecimentoService::new(
            estabelecimento_repo.clone(),
            ramo_repo.clone(),
            produto_repo,
            listagem_repo.clone(),
            categoria_repo,
        );
        let pedido_service = PedidoService::new(
            pedido_repo,
            cliente_repo,
            estabelecimento_repo,
            endereco_repo,
            ramo_repo,
            listagem_repo,
        );

        Ok(Self {
            db_pool,
            cliente_service,
            endereco_service,
            ramo_service,
            categoria_produto_service,
            produto_service,
            estabelecimento_service,
            pedido_service,
        })
    }
}
