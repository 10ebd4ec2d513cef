//src/main.rs

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let cliente_routes = Router::new()
        .route(
            "/",
            post(handlers::cliente::create).get(handlers::cliente::find_all),
        )
        .route(
            "/{id}",
            get(handlers::cliente::find_by_id)
                .put(handlers::cliente::update)
                .delete(handlers::cliente::delete),
        )
        .route("/email/{email}", get(handlers::cliente::find_by_email));

    let endereco_routes = Router::new()
        .route(
            "/",
            post(handlers::endereco::create).get(handlers::endereco::find_all),
        )
        .route(
            "/{id}",
            get(handlers::endereco::find_by_id)
                .put(handlers::endereco::update)
                .delete(handlers::endereco::delete),
        )
        .route("/cidade/{cidade}", get(handlers::endereco::find_by_cidade))
        .route("/cep/{cep}", get(handlers::endereco::find_by_cep));

    let ramo_routes = Router::new()
        .route(
            "/",
            post(handlers::ramo::create).get(handlers::ramo::find_all),
        )
        .route(
            "/{id}",
            get(handlers::ramo::find_by_id)
                .put(handlers::ramo::update)
                .delete(handlers::ramo::delete),
        )
        .route("/nome/{nome}", get(handlers::ramo::find_by_nome));

    let categoria_produto_routes = Router::new()
        .route(
            "/",
            post(handlers::categoria_produto::create).get(handlers::categoria_produto::find_all),
        )
        .route(
            "/{id}",
            get(handlers::categoria_produto::find_by_id)
                .put(handlers::categoria_produto::update)
                .delete(handlers::categoria_produto::delete),
        )
        .route(
            "/nome/{categoria}",
            get(handlers::categoria_produto::find_by_categoria),
        );

    let produto_routes = Router::new()
        .route(
            "/",
            post(handlers::produto::create).get(handlers::produto::find_all),
        )
        .route(
            "/{id}",
            get(handlers::produto::find_by_id)
                .put(handlers::produto::update)
                .delete(handlers::produto::delete),
        )
        .route("/nome/{nome}", get(handlers::produto::find_by_nome))
        .route(
            "/categoria/{categoriaId}",
            get(handlers::produto::find_by_categoria),
        );

    let estabelecimento_routes = Router::new()
        .route(
            "/",
            post(handlers::estabelecimento::create).get(handlers::estabelecimento::find_all),
        )
        .route(
            "/{id}",
            get(handlers::estabelecimento::find_by_id)
                .put(handlers::estabelecimento::update)
                .delete(handlers::estabelecimento::delete),
        )
        .route(
            "/nome/{nome}",
            get(handlers::estabelecimento::find_by_nome),
        )
        .route(
            "/ramo/{ramoId}",
            get(handlers::estabelecimento::find_by_ramo),
        )
        .route(
            "/{id}/produtos",
            post(handlers::estabelecimento::adicionar_produto)
                .get(handlers::estabelecimento::listar_produtos),
        );

    let pedido_routes = Router::new()
        .route("/", post(handlers::pedido::create))
        .route(
            "/{numeroPedido}",
            get(handlers::pedido::get_by_numero_pedido),
        )
        .route(
            "/historico/cpf/{cpf}",
            get(handlers::pedido::historico_por_cpf),
        )
        .route(
            "/historico/pedido/{numeroPedido}",
            get(handlers::pedido::historico_por_numero_pedido),
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/v1/clientes", cliente_routes)
        .nest("/api/v1/enderecos", endereco_routes)
        .nest("/api/v1/ramos", ramo_routes)
        .nest("/api/v1/categorias-produto", categoria_produto_routes)
        .nest("/api/v1/produtos", produto_routes)
        .nest("/api/v1/estabelecimentos", estabelecimento_routes)
        .nest("/api/v1/pedidos", pedido_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "UP",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "Delivery Tech API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
