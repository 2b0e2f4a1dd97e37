use crate::common::*;

#[async_trait]
pub trait SearchService {
    async fn fetch_corpus(&self) -> anyhow::Result<String>;
    async fn fetch_with_query(&self, es_query: &Value) -> anyhow::Result<String>;
}
