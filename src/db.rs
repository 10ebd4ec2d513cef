pub mod categoria_produto_repo;
pub use categoria_produto_repo::CategoriaProdutoRepository;
pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
pub mod endereco_repo;
pub use endereco_repo::EnderecoRepository;
pub mod estabelecimento_repo;
pub use estabelecimento_repo::EstabelecimentoRepository;
pub mod pedido_repo;
pub use pedido_repo::PedidoRepository;
pub mod produto_estabelecimento_repo;
pub use produto_estabelecimento_repo::ProdutoEstabelecimentoRepository;
pub mod produto_repo;
pub use produto_repo::ProdutoRepository;
pub mod ramo_repo;
pub use ramo_repo::RamoEstabelecimentoRepository;
