use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{elastic_config::*, index_config::*, server_config::*};

use crate::env_configuration::env_config::*;

static SERVER_CONFIG: once_lazy<Arc<Config>> =
    once_lazy::new(|| Arc::new(initialize_server_config()));

#[doc = "Function to initialize System configuration information instances"]
pub fn initialize_server_config() -> Config {
    info!("initialize_server_config() START!");

    let system_config: Config = Config::new();
    system_config
}

#[doc = "HTTP server config 정보"]
pub fn get_server_config_info() -> Arc<ServerConfig> {
    let server_config: &Arc<ServerConfig> = &SERVER_CONFIG.server;
    Arc::clone(server_config)
}

#[doc = "Elasticsearch connection config 정보"]
pub fn get_elastic_config_info() -> Arc<ElasticConfig> {
    let elastic_config: &Arc<ElasticConfig> = &SERVER_CONFIG.elastic;
    Arc::clone(elastic_config)
}

#[doc = "Span index config 정보"]
pub fn get_index_config_info() -> Arc<IndexConfig> {
    let index_config: &Arc<IndexConfig> = &SERVER_CONFIG.index;
    Arc::clone(index_config)
}

#[derive(Debug)]
pub struct Config {
    pub server: Arc<ServerConfig>,
    pub elastic: Arc<ElasticConfig>,
    pub index: Arc<IndexConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigNotSafe {
    pub server: ServerConfig,
    pub elastic: ElasticConfig,
    pub index: IndexConfig,
}

impl Config {
    pub fn new() -> Self {
        let system_config: ConfigNotSafe =
            match read_toml_from_file::<ConfigNotSafe>(&SYSTEM_CONFIG_PATH) {
                Ok(system_config) => system_config,
                Err(e) => {
                    error!(
                        "[Error][Config::new()] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                    panic!(
                        "[Error][Config::new()] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                }
            };

        Config {
            server: Arc::new(system_config.server),
            elastic: Arc::new(system_config.elastic),
            index: Arc::new(system_config.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_fill_missing_sections() {
        let raw: &str = r#"
            [server]

            [elastic]
            hosts = ["localhost:9200"]

            [index]
            corpus_index = "jaeger-span-2024-07-21"
            aggregation_index = "jaeger-span-2024-07-23"
        "#;

        let config: ConfigNotSafe = toml::from_str(raw).unwrap();

        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.elastic.timeout_sec, 30);
        assert!(config.elastic.es_id.is_empty());
        assert_eq!(config.index.service_name, "java-bank-api");
        assert_eq!(config.index.result_window, 1000);
        assert_eq!(config.index.slowest_per_endpoint, 5);
        assert_eq!(config.index.operation_names.len(), 6);
        assert!(config
            .index
            .operation_names
            .contains(&String::from("POST /api/v1/transactions/transfer")));
    }

    #[test]
    fn test_config_rejects_missing_index_names() {
        let raw: &str = r#"
            [server]
            port = 8080

            [elastic]
            hosts = ["localhost:9200"]

            [index]
            service_name = "java-bank-api"
        "#;

        assert!(toml::from_str::<ConfigNotSafe>(raw).is_err());
    }
}
