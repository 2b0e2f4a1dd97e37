/*
Create date : 2024-07-21
Description : Jaeger span 인덱스를 조회해서 은행 거래 통계(건수, 이체, 예외, 지연시간)를 제공해주는 HTTP API 서비스

History     : 2024-07-21        # [v.1.0.0] first create
              2024-07-23        # [v.1.1.0] percentile / slowest transaction API 추가
              2024-08-05        # [v.1.2.0]
                                  1) response body 추출 로직을 공통 함수로 통합
                                  2) 인덱스명, ES 호스트 정보를 toml 설정 파일로 분리
                                  3) Elasticsearch client 를 main 에서 생성 후 주입하도록 변경
*/
mod common;
use common::*;

mod aggregator;

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{search_service::*, transaction_service::*};

mod model;
use model::configs::{config::*, index_config::*, server_config::*};
use model::elastic_dto::span_query::*;

mod repository;
use repository::es_repository::*;

mod env_configuration;

mod traits;
use traits::repository::es_repository_trait::*;

mod enums;

#[doc = "Resolves once Ctrl+C is received."]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("[main] Failed to listen for Ctrl+C signal: {:?}", e);
    }

    info!("Shutting down...");
}

#[tokio::main]
async fn main() {
    /* config 설정 전역 적용 */
    dotenv().ok();

    /* 전역 로거설정 */
    let _logger_handle: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        panic!("[main()] Unable to initialize the global logger: {:?}", e)
    });

    info!("Start Bank Transaction Analytics Server");

    let es_repository: EsRepositoryImpl = initialize_db_client().unwrap_or_else(|e| {
        error!(
            "[main()] Unable to retrieve 'Elasticsearch' connection information.: {:?}",
            e
        );
        panic!(
            "[main()] Unable to retrieve 'Elasticsearch' connection information.: {:?}",
            e
        )
    });

    /* Unreachable nodes are only reported; the round-robin pool keeps them. */
    for (host, is_connected) in es_repository.get_node_conn_check().await {
        if is_connected {
            info!("[main()] Elasticsearch node {} is reachable", host);
        } else {
            warn!("[main()] Elasticsearch node {} is not reachable", host);
        }
    }

    /*
        Dependency Injection(DI)
        The backend client is created once here and shared by every request.
    */
    let index_config: Arc<IndexConfig> = get_index_config_info();
    let query_builder: Arc<SpanQueryBuilder> = Arc::new(SpanQueryBuilder::new(index_config));

    let search_service: Arc<SearchServiceImpl<EsRepositoryImpl>> = Arc::new(
        SearchServiceImpl::new(Arc::new(es_repository), Arc::clone(&query_builder)),
    );

    let transaction_service: Arc<TransactionServiceImpl<SearchServiceImpl<EsRepositoryImpl>>> =
        Arc::new(TransactionServiceImpl::new(search_service, query_builder));

    let controller: MainController<TransactionServiceImpl<SearchServiceImpl<EsRepositoryImpl>>> =
        MainController::new(transaction_service);

    let server_config: Arc<ServerConfig> = get_server_config_info();
    let bind_addr: String = server_config.bind_addr();

    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| {
            error!("[main()] Failed to bind {}: {:?}", bind_addr, e);
            panic!("[main()] Failed to bind {}: {:?}", bind_addr, e)
        });

    info!("Listening on {}", bind_addr);

    if let Err(e) = axum::serve(listener, controller.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("[main] server error: {:?}", e);
    }
}
