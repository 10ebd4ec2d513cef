pub mod categoria_produto_service;
pub use categoria_produto_service::CategoriaProdutoService;
pub mod cliente_service;
pub use cliente_service::ClienteService;
pub mod endereco_service;
pub use endereco_service::EnderecoService;
pub mod estabelecimento_service;
pub use estabelecimento_service::EstabelecimentoService;
pub mod pedido_service;
pub use pedido_service::PedidoService;
pub mod produto_service;
pub use produto_service::ProdutoService;
pub mod ramo_service;
pub use ramo_service::RamoEstabelecimentoService;
