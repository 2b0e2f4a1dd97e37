use crate::common::*;

#[async_trait]
pub trait EsRepository {
    async fn get_search_raw(&self, es_query: &Value, index_name: &str) -> anyhow::Result<String>;
    async fn get_node_conn_check(&self) -> Vec<(String, bool)>;
}
