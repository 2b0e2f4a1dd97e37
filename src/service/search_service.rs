use crate::common::*;

use crate::model::configs::index_config::*;
use crate::model::elastic_dto::span_query::*;

use crate::traits::{repository::es_repository_trait::*, service::search_service_trait::*};

#[derive(Clone, Debug, new)]
pub struct SearchServiceImpl<R: EsRepository> {
    elastic_obj: Arc<R>,
    query_builder: Arc<SpanQueryBuilder>,
}

impl<R: EsRepository> SearchServiceImpl<R> {
    fn index_config(&self) -> &IndexConfig {
        self.query_builder.index_config()
    }
}

#[async_trait]
impl<R> SearchService for SearchServiceImpl<R>
where
    R: EsRepository + Sync + Send,
{
    #[doc = "Runs the fixed transaction query against the corpus index."]
    /// # Returns
    /// * anyhow::Result<String> - raw search response, at most `result_window` hits
    async fn fetch_corpus(&self) -> anyhow::Result<String> {
        let query: Value = self.query_builder.build_corpus_query();
        let index_name: &str = self.index_config().corpus_index();

        debug!("[SearchServiceImpl->fetch_corpus] index: {}", index_name);

        self.elastic_obj.get_search_raw(&query, index_name).await
    }

    #[doc = "Runs a caller supplied aggregation query against the aggregation index."]
    /// # Arguments
    /// * `es_query` - full search body
    ///
    /// # Returns
    /// * anyhow::Result<String> - raw search response
    async fn fetch_with_query(&self, es_query: &Value) -> anyhow::Result<String> {
        let index_name: &str = self.index_config().aggregation_index();

        debug!("[SearchServiceImpl->fetch_with_query] index: {}", index_name);

        self.elastic_obj.get_search_raw(es_query, index_name).await
    }
}
