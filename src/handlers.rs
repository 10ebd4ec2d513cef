pub mod categoria_produto;
pub mod cliente;
pub mod endereco;
pub mod estabelecimento;
pub mod pedido;
pub mod produto;
pub mod ramo;
