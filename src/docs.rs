// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Clientes ---
        handlers::cliente::create,
        handlers::cliente::find_by_id,
        handlers::cliente::find_all,
        handlers::cliente::find_by_email,
        handlers::cliente::update,
        handlers::cliente::delete,

        // --- Endereços ---
        handlers::endereco::create,
        handlers::endereco::find_by_id,
        handlers::endereco::find_all,
        handlers::endereco::find_by_cidade,
        handlers::endereco::find_by_cep,
        handlers::endereco::update,
        handlers::endereco::delete,

        // --- Ramos ---
        handlers::ramo::create,
        handlers::ramo::find_by_id,
        handlers::ramo::find_all,
        handlers::ramo::find_by_nome,
        handlers::ramo::update,
        handlers::ramo::delete,

        // --- Categorias de Produto ---
        handlers::categoria_produto::create,
        handlers::categoria_produto::find_by_id,
        handlers::categoria_produto::find_all,
        handlers::categoria_produto::find_by_categoria,
        handlers::categoria_produto::update,
        handlers::categoria_produto::delete,

        // --- Produtos ---
        handlers::produto::create,
        handlers::produto::find_by_id,
        handlers::produto::find_all,
        handlers::produto::find_by_nome,
        handlers::produto::find_by_categoria,
        handlers::produto::update,
        handlers::produto::delete,

        // --- Estabelecimentos ---
        handlers::estabelecimento::create,
        handlers::estabelecimento::find_by_id,
        handlers::estabelecimento::find_all,
        handlers::estabelecimento::find_by_nome,
        handlers::estabelecimento::find_by_ramo,
        handlers::estabelecimento::update,
        handlers::estabelecimento::delete,
        handlers::estabelecimento::adicionar_produto,
        handlers::estabelecimento::listar_produtos,

        // --- Pedidos ---
        handlers::pedido::create,
        handlers::pedido::get_by_numero_pedido,
        handlers::pedido::historico_por_cpf,
        handlers::pedido::historico_por_numero_pedido,
    ),
    components(
        schemas(
            // --- Endereços ---
            models::endereco::TipoEndereco,
            models::endereco::Endereco,
            models::endereco::CreateEnderecoPayload,

            // --- Clientes ---
            models::cliente::ClienteResponse,
            handlers::cliente::CreateClientePayload,

            // --- Ramos / Estabelecimentos ---
            models::estabelecimento::RamoEstabelecimento,
            models::estabelecimento::EstabelecimentoResponse,
            handlers::ramo::CreateRamoPayload,
            handlers::estabelecimento::CreateEstabelecimentoPayload,
            handlers::estabelecimento::AddProdutoEstabelecimentoPayload,

            // --- Produtos ---
            models::produto::CategoriaProduto,
            models::produto::ProdutoResponse,
            models::produto::ProdutoEstabelecimentoResponse,
            handlers::categoria_produto::CreateCategoriaProdutoPayload,
            handlers::produto::CreateProdutoPayload,

            // --- Pedidos ---
            models::pedido::ItemPedidoPayload,
            models::pedido::CreatePedidoPayload,
            models::pedido::ItemPedidoResponse,
            models::pedido::PedidoResponse,
            models::pedido::ItemHistorico,
            models::pedido::PedidoHistorico,
            models::pedido::ProdutoMaisPedido,
            models::pedido::HistoricoClienteResponse,
        )
    ),
    tags(
        (name = "Clientes", description = "Cadastro de Clientes"),
        (name = "Endereços", description = "Endereços de Clientes e de Entrega"),
        (name = "Ramos", description = "Ramos de Atuação dos Estabelecimentos"),
        (name = "Categorias de Produto", description = "Categorias de Produtos"),
        (name = "Produtos", description = "Catálogo de Produtos"),
        (name = "Estabelecimentos", description = "Estabelecimentos e Cardápios"),
        (name = "Pedidos", description = "Pedidos e Histórico de Consumo")
    )
)]
pub struct ApiDoc;
