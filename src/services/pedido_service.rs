// src/services/pedido_service.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::{Acquire, PgConnection, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        ClienteRepository, EnderecoRepository, EstabelecimentoRepository, PedidoRepository,
        ProdutoEstabelecimentoRepository, RamoEstabelecimentoRepository,
    },
    models::{
        cliente::{Cliente, ClienteResponse},
        estabelecimento::EstabelecimentoResponse,
        pedido::{
            CreatePedidoPayload, HistoricoClienteResponse, ItemHistorico, ItemPedidoDetalhe,
            ItemPedidoResponse, Pedido, PedidoHistorico, PedidoResponse, ProdutoMaisPedido,
            STATUS_PENDENTE,
        },
    },
};

/// Quantos pedidos recentes entram na apuração dos produtos mais pedidos.
const JANELA_TOP_PRODUTOS: usize = 10;

/// Quantos produtos aparecem no ranking.
const TOP_PRODUTOS: usize = 3;

#[derive(Clone)]
pub struct PedidoService {
    repo: PedidoRepository,
    cliente_repo: ClienteRepository,
    estabelecimento_repo: EstabelecimentoRepository,
    endereco_repo: EnderecoRepository,
    ramo_repo: RamoEstabelecimentoRepository,
    listagem_repo: ProdutoEstabelecimentoRepository,
}

impl PedidoService {
    pub fn new(
        repo: PedidoRepository,
        cliente_repo: ClienteRepository,
        estabelecimento_repo: EstabelecimentoRepository,
        endereco_repo: EnderecoRepository,
        ramo_repo: RamoEstabelecimentoRepository,
        listagem_repo: ProdutoEstabelecimentoRepository,
    ) -> Self {
        Self {
            repo,
            cliente_repo,
            estabelecimento_repo,
            endereco_repo,
            ramo_repo,
            listagem_repo,
        }
    }

    /// Cria um pedido com seus itens em uma única transação. O preço de cada
    /// item é resolvido no momento da criação (promocional quando a janela
    /// está vigente) e fica congelado no item.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreatePedidoPayload,
    ) -> Result<PedidoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!(
            "Criando novo pedido para cliente: {}, estabelecimento: {}",
            payload.cliente_id,
            payload.estabelecimento_id
        );

        let mut tx = executor.begin().await?;

        let cliente = self
            .cliente_repo
            .find_by_id(&mut *tx, payload.cliente_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Cliente não encontrado: {}", payload.cliente_id);
                AppError::NotFound(format!(
                    "Cliente não encontrado com ID: {}",
                    payload.cliente_id
                ))
            })?;

        let estabelecimento = self
            .estabelecimento_repo
            .find_by_id(&mut *tx, payload.estabelecimento_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Estabelecimento não encontrado: {}", payload.estabelecimento_id);
                AppError::NotFound(format!(
                    "Estabelecimento não encontrado com ID: {}",
                    payload.estabelecimento_id
                ))
            })?;

        let endereco_entrega = self
            .endereco_repo
            .find_by_id(&mut *tx, payload.endereco_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Endereço não encontrado: {}", payload.endereco_id);
                AppError::NotFound(format!(
                    "Endereço não encontrado com ID: {}",
                    payload.endereco_id
                ))
            })?;

        let agora = Utc::now();
        let mut valor_total_pedido = Decimal::ZERO;
        let mut itens_processados = Vec::with_capacity(payload.itens.len());

        for item in &payload.itens {
            // A listagem é resolvida restrita ao estabelecimento do pedido:
            // um id válido de outro estabelecimento não conta
            let listagem = self
                .listagem_repo
                .find_by_id_and_estabelecimento(
                    &mut *tx,
                    item.produto_estabelecimento_id,
                    estabelecimento.id,
                )
                .await?
                .ok_or_else(|| {
                    tracing::warn!(
                        "Produto não encontrado no estabelecimento: {}",
                        item.produto_estabelecimento_id
                    );
                    AppError::NotFound(format!(
                        "Produto não encontrado no estabelecimento: {}",
                        item.produto_estabelecimento_id
                    ))
                })?;

            let (valor_unitario, em_promocao) = listagem.preco_vigente(agora);
            let valor_total_item = valor_unitario * Decimal::from(item.quantidade);
            valor_total_pedido += valor_total_item;

            tracing::debug!(
                "Item processado - listagem: {}, em promoção: {}, valor unitário: {}",
                listagem.id,
                em_promocao,
                valor_unitario
            );

            itens_processados.push((
                listagem.id,
                item.quantidade,
                valor_unitario,
                valor_total_item,
                em_promocao,
            ));
        }

        let codigo: u32 = rand::rng().random_range(0..0x10_0000);
        let numero_pedido = gerar_numero_pedido(agora, codigo);

        let pedido = self
            .repo
            .create(
                &mut *tx,
                cliente.id,
                estabelecimento.id,
                endereco_entrega.id,
                &numero_pedido,
                STATUS_PENDENTE,
                valor_total_pedido,
                agora,
            )
            .await?;

        for (listagem_id, quantidade, valor_unitario, valor_total, em_promocao) in itens_processados
        {
            self.repo
                .add_item(
                    &mut *tx,
                    pedido.id,
                    listagem_id,
                    quantidade,
                    valor_unitario,
                    valor_total,
                    em_promocao,
                )
                .await?;
        }

        let resposta = self.montar_resposta(&mut *tx, pedido).await?;
        tx.commit().await?;

        tracing::info!(
            "Pedido criado com sucesso - Número: {}, Valor Total: {}",
            numero_pedido,
            valor_total_pedido
        );

        Ok(resposta)
    }

    pub async fn get_by_numero_pedido<'e, E>(
        &self,
        executor: E,
        numero_pedido: &str,
    ) -> Result<PedidoResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!("Buscando pedido pelo número: {}", numero_pedido);

        let mut conn = executor.acquire().await?;

        let pedido = self
            .repo
            .find_by_numero_pedido(&mut *conn, numero_pedido)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Pedido não encontrado: {}", numero_pedido);
                AppError::NotFound(format!("Pedido não encontrado: {}", numero_pedido))
            })?;

        self.montar_resposta(&mut *conn, pedido).await
    }

    /// Histórico de consumo de um cliente localizado pelo documento.
    pub async fn historico_por_documento<'e, E>(
        &self,
        executor: E,
        documento: &str,
    ) -> Result<HistoricoClienteResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!(
            "Buscando histórico de consumo para cliente com documento: {}",
            documento
        );

        let mut conn = executor.acquire().await?;

        let pedidos = self
            .repo
            .find_by_cliente_documento(&mut *conn, documento)
            .await?;

        if pedidos.is_empty() {
            tracing::warn!("Nenhum pedido encontrado para o documento: {}", documento);
            return Err(AppError::NotFound(format!(
                "Nenhum pedido encontrado para o cliente com documento: {}",
                documento
            )));
        }

        let cliente = self
            .cliente_repo
            .find_by_id(&mut *conn, pedidos[0].cliente_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Cliente não encontrado com ID: {}",
                    pedidos[0].cliente_id
                ))
            })?;

        let ids: Vec<Uuid> = pedidos.iter().map(|p| p.id).collect();
        let itens = self.repo.itens_detalhados(&mut *conn, &ids).await?;

        Ok(montar_historico(&cliente, pedidos, itens))
    }

    /// Histórico de consumo a partir de um número de pedido: resolve o
    /// cliente daquele pedido e devolve o histórico completo dele, não apenas
    /// o pedido consultado.
    pub async fn historico_por_numero_pedido<'e, E>(
        &self,
        executor: E,
        numero_pedido: &str,
    ) -> Result<HistoricoClienteResponse, AppError>
    where
        E: Acquire<'e, Database = Postgres>,
    {
        tracing::info!(
            "Buscando histórico de consumo pelo número de pedido: {}",
            numero_pedido
        );

        let mut conn = executor.acquire().await?;

        let pedido = self
            .repo
            .find_by_numero_pedido(&mut *conn, numero_pedido)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Pedido não encontrado: {}", numero_pedido);
                AppError::NotFound(format!("Pedido não encontrado: {}", numero_pedido))
            })?;

        let cliente = self
            .cliente_repo
            .find_by_id(&mut *conn, pedido.cliente_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Cliente não encontrado com ID: {}",
                    pedido.cliente_id
                ))
            })?;

        let pedidos = self.repo.find_by_cliente_id(&mut *conn, cliente.id).await?;

        let ids: Vec<Uuid> = pedidos.iter().map(|p| p.id).collect();
        let itens = self.repo.itens_detalhados(&mut *conn, &ids).await?;

        Ok(montar_historico(&cliente, pedidos, itens))
    }

    async fn montar_resposta(
        &self,
        conn: &mut PgConnection,
        pedido: Pedido,
    ) -> Result<PedidoResponse, AppError> {
        let cliente = self
            .cliente_repo
            .find_by_id(&mut *conn, pedido.cliente_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Cliente não encontrado com ID: {}",
                    pedido.cliente_id
                ))
            })?;

        let endereco_cliente = match cliente.endereco_id {
            Some(endereco_id) => self.endereco_repo.find_by_id(&mut *conn, endereco_id).await?,
            None => None,
        };

        let estabelecimento = self
            .estabelecimento_repo
            .find_by_id(&mut *conn, pedido.estabelecimento_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Estabelecimento não encontrado com ID: {}",
                    pedido.estabelecimento_id
                ))
            })?;

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

        let endereco_entrega = self
            .endereco_repo
            .find_by_id(&mut *conn, pedido.endereco_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Endereço não encontrado com ID: {}",
                    pedido.endereco_id
                ))
            })?;

        let itens = self
            .repo
            .itens_detalhados(&mut *conn, &[pedido.id])
            .await?
            .into_iter()
            .map(|i| ItemPedidoResponse {
                id: i.id,
                produto_id: i.produto_id,
                nome_produto: i.nome_produto,
                quantidade: i.quantidade,
                valor_unitario: i.valor_unitario,
                valor_total: i.valor_total,
                em_promocao: i.em_promocao,
            })
            .collect();

        Ok(PedidoResponse {
            id: pedido.id,
            cliente: ClienteResponse::montar(cliente, endereco_cliente),
            estabelecimento: EstabelecimentoResponse::montar(estabelecimento, ramo),
            endereco: endereco_entrega,
            numero_pedido: pedido.numero_pedido,
            status: pedido.status,
            valor_total: pedido.valor_total,
            itens,
            data_pedido: pedido.data_pedido,
        })
    }
}

/// Gera o número do pedido no formato YYYYMM-xxxxx, onde xxxxx é um código
/// hexadecimal minúsculo sorteado em [0, 0x100000).
fn gerar_numero_pedido(agora: DateTime<Utc>, codigo: u32) -> String {
    format!("{}-{:05x}", agora.format("%Y%m"), codigo)
}

/// Monta a resposta completa do histórico de consumo a partir dos pedidos
/// (do mais recente ao mais antigo) e dos itens já juntados com os produtos.
fn montar_historico(
    cliente: &Cliente,
    pedidos: Vec<Pedido>,
    itens: Vec<ItemPedidoDetalhe>,
) -> HistoricoClienteResponse {
    let mut itens_por_pedido: HashMap<Uuid, Vec<ItemHistorico>> = HashMap::new();
    for item in itens {
        itens_por_pedido
            .entry(item.pedido_id)
            .or_default()
            .push(ItemHistorico {
                id: item.id,
                produto_id: item.produto_id,
                nome_produto: item.nome_produto,
                descricao_produto: item.descricao_produto,
                quantidade: item.quantidade,
                valor_unitario: item.valor_unitario,
                valor_total: item.valor_total,
                em_promocao: item.em_promocao,
            });
    }

    let historico: Vec<PedidoHistorico> = pedidos
        .into_iter()
        .map(|p| {
            let itens = itens_por_pedido.remove(&p.id).unwrap_or_default();
            PedidoHistorico {
                id: p.id,
                numero_pedido: p.numero_pedido,
                data_pedido: p.data_pedido,
                status: p.status,
                valor_total: p.valor_total,
                itens,
            }
        })
        .collect();

    let top_produtos = extrair_top_produtos(&historico);

    HistoricoClienteResponse {
        cliente_id: cliente.id,
        nome_cliente: cliente.nome.clone(),
        documento_identificacao: cliente.documento_identificacao.clone(),
        email: cliente.email.clone(),
        telefone: cliente.telefone.clone(),
        top_produtos,
        historico_pedidos: historico,
    }
}

/// Apura os produtos mais pedidos dentro da janela dos pedidos mais
/// recentes, agrupando os itens pelo produto.
fn extrair_top_produtos(historico: &[PedidoHistorico]) -> Vec<ProdutoMaisPedido> {
    // Vec preserva a ordem de primeira aparição; o mapa só indexa
    let mut indice: HashMap<Uuid, usize> = HashMap::new();
    let mut estatisticas: Vec<ProdutoMaisPedido> = Vec::new();

    for pedido in historico.iter().take(JANELA_TOP_PRODUTOS) {
        for item in &pedido.itens {
            let pos = *indice.entry(item.produto_id).or_insert_with(|| {
                estatisticas.push(ProdutoMaisPedido {
                    produto_id: item.produto_id,
                    nome_produto: item.nome_produto.clone(),
                    total_vezes_pedido: 0,
                    total_unidades_pedidas: 0,
                });
                estatisticas.len() - 1
            });
            estatisticas[pos].total_vezes_pedido += 1;
            estatisticas[pos].total_unidades_pedidas += item.quantidade;
        }
    }

    // Desempate determinístico: vezes pedido desc, unidades desc, id asc
    estatisticas.sort_by(|a, b| {
        b.total_vezes_pedido
            .cmp(&a.total_vezes_pedido)
            .then(b.total_unidades_pedidas.cmp(&a.total_unidades_pedidas))
            .then(a.produto_id.cmp(&b.produto_id))
    });
    estatisticas.truncate(TOP_PRODUTOS);
    estatisticas
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn cliente_teste() -> Cliente {
        Cliente {
            id: Uuid::new_v4(),
            nome: "Maria da Silva".to_string(),
            email: "maria@email.com".to_string(),
            telefone: "(41) 99999-1234".to_string(),
            documento_identificacao: "12345678900".to_string(),
            observacoes: None,
            endereco_id: None,
        }
    }

    // Pedidos em ordem decrescente de data: o índice 0 é o mais recente.
    fn pedidos_teste(cliente: &Cliente, quantidade: usize) -> Vec<Pedido> {
        let base = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        (0..quantidade)
            .map(|i| Pedido {
                id: Uuid::new_v4(),
                cliente_id: cliente.id,
                estabelecimento_id: Uuid::new_v4(),
                endereco_id: Uuid::new_v4(),
                numero_pedido: format!("202608-{:05x}", i),
                status: STATUS_PENDENTE.to_string(),
                valor_total: Decimal::new(1000, 2),
                data_pedido: base - Duration::hours(i as i64),
            })
            .collect()
    }

    fn item(pedido_id: Uuid, produto_id: Uuid, nome: &str, quantidade: i32) -> ItemPedidoDetalhe {
        ItemPedidoDetalhe {
            id: Uuid::new_v4(),
            pedido_id,
            produto_id,
            nome_produto: nome.to_string(),
            descricao_produto: format!("Descrição de {}", nome),
            quantidade,
            valor_unitario: Decimal::new(1000, 2),
            valor_total: Decimal::new(1000, 2) * Decimal::from(quantidade),
            em_promocao: false,
        }
    }

    #[test]
    fn numero_pedido_tem_prefixo_ano_mes_e_codigo_hex() {
        let agora = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();

        assert_eq!(gerar_numero_pedido(agora, 0xabc), "202608-00abc");
        assert_eq!(gerar_numero_pedido(agora, 0), "202608-00000");
        assert_eq!(gerar_numero_pedido(agora, 0xfffff), "202608-fffff");

        let re = regex::Regex::new(r"^[0-9]{6}-[0-9a-f]{5}$").unwrap();
        assert!(re.is_match(&gerar_numero_pedido(agora, 0x1f3a1)));
    }

    #[test]
    fn top_produtos_considera_apenas_os_dez_pedidos_mais_recentes() {
        let cliente = cliente_teste();
        let pedidos = pedidos_teste(&cliente, 12);

        let produto_a = Uuid::new_v4();
        let produto_b = Uuid::new_v4();
        let fora_da_janela = Uuid::new_v4();

        let mut itens = Vec::new();
        // Produto A em todos os 10 pedidos da janela, B em 3 deles
        for pedido in pedidos.iter().take(10) {
            itens.push(item(pedido.id, produto_a, "Pizza Margherita", 1));
        }
        for pedido in pedidos.iter().take(3) {
            itens.push(item(pedido.id, produto_b, "Refrigerante", 2));
        }
        // Produto só nos 2 pedidos mais antigos, com quantidade enorme: não
        // pode aparecer no ranking
        for pedido in pedidos.iter().skip(10) {
            itens.push(item(pedido.id, fora_da_janela, "Pastel", 99));
        }

        let resposta = montar_historico(&cliente, pedidos, itens);

        // O histórico devolvido é completo, do mais recente ao mais antigo
        assert_eq!(resposta.historico_pedidos.len(), 12);
        for par in resposta.historico_pedidos.windows(2) {
            assert!(par[0].data_pedido > par[1].data_pedido);
        }

        assert_eq!(resposta.top_produtos.len(), 2);
        assert_eq!(resposta.top_produtos[0].produto_id, produto_a);
        assert_eq!(resposta.top_produtos[0].total_vezes_pedido, 10);
        assert_eq!(resposta.top_produtos[0].total_unidades_pedidas, 10);
        assert_eq!(resposta.top_produtos[1].produto_id, produto_b);
        assert_eq!(resposta.top_produtos[1].total_vezes_pedido, 3);
        assert_eq!(resposta.top_produtos[1].total_unidades_pedidas, 6);
        assert!(resposta
            .top_produtos
            .iter()
            .all(|p| p.produto_id != fora_da_janela));
    }

    #[test]
    fn top_produtos_nao_completa_quando_ha_menos_de_tres() {
        let cliente = cliente_teste();
        let pedidos = pedidos_teste(&cliente, 2);

        let produto_a = Uuid::new_v4();
        let produto_b = Uuid::new_v4();

        let itens = vec![
            item(pedidos[0].id, produto_a, "Pizza Margherita", 1),
            item(pedidos[1].id, produto_a, "Pizza Margherita", 1),
            item(pedidos[1].id, produto_b, "Refrigerante", 4),
        ];

        let resposta = montar_historico(&cliente, pedidos, itens);

        assert_eq!(resposta.top_produtos.len(), 2);
    }

    #[test]
    fn top_produtos_corta_em_tres() {
        let cliente = cliente_teste();
        let pedidos = pedidos_teste(&cliente, 1);

        let mut itens = Vec::new();
        for i in 0..5 {
            itens.push(item(
                pedidos[0].id,
                Uuid::new_v4(),
                &format!("Produto {}", i),
                1,
            ));
        }

        let resposta = montar_historico(&cliente, pedidos, itens);

        assert_eq!(resposta.top_produtos.len(), 3);
    }

    #[test]
    fn desempate_por_unidades_e_depois_por_id() {
        let cliente = cliente_teste();
        let pedidos = pedidos_teste(&cliente, 2);

        let produto_a = Uuid::new_v4();
        let produto_b = Uuid::new_v4();

        // Mesmo número de vezes (2 cada), mas B leva em unidades
        let itens = vec![
            item(pedidos[0].id, produto_a, "Pizza Margherita", 1),
            item(pedidos[1].id, produto_a, "Pizza Margherita", 1),
            item(pedidos[0].id, produto_b, "Refrigerante", 5),
            item(pedidos[1].id, produto_b, "Refrigerante", 5),
        ];

        let resposta = montar_historico(&cliente, pedidos.clone(), itens);
        assert_eq!(resposta.top_produtos[0].produto_id, produto_b);
        assert_eq!(resposta.top_produtos[1].produto_id, produto_a);

        // Empate total: decide o id do produto, em ordem crescente
        let itens_empatados = vec![
            item(pedidos[0].id, produto_a, "Pizza Margherita", 2),
            item(pedidos[0].id, produto_b, "Refrigerante", 2),
        ];

        let resposta = montar_historico(&cliente, pedidos, itens_empatados);
        let esperado = produto_a.min(produto_b);
        assert_eq!(resposta.top_produtos[0].produto_id, esperado);
    }

    #[test]
    fn historico_carrega_dados_do_cliente_e_dos_itens() {
        let cliente = cliente_teste();
        let pedidos = pedidos_teste(&cliente, 1);
        let produto = Uuid::new_v4();

        let itens = vec![item(pedidos[0].id, produto, "Pizza Margherita", 3)];

        let resposta = montar_historico(&cliente, pedidos, itens);

        assert_eq!(resposta.cliente_id, cliente.id);
        assert_eq!(resposta.nome_cliente, "Maria da Silva");
        assert_eq!(resposta.documento_identificacao, "12345678900");

        let pedido = &resposta.historico_pedidos[0];
        assert_eq!(pedido.itens.len(), 1);
        assert_eq!(pedido.itens[0].nome_produto, "Pizza Margherita");
        assert_eq!(pedido.itens[0].quantidade, 3);
        assert_eq!(pedido.itens[0].valor_total, Decimal::new(3000, 2));
    }
}
