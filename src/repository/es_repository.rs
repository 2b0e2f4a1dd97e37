use crate::common::*;

use crate::model::configs::{config::get_elastic_config_info, elastic_config::*};
use crate::model::elastic_dto::backend_error::*;

use crate::traits::repository::es_repository_trait::*;

#[derive(Debug, Getters, Clone)]
#[getset(get = "pub")]
pub struct EsRepositoryImpl {
    es_client: Elasticsearch,
    hosts: Vec<String>,
    es_id: Option<String>,
    es_pw: Option<String>,
}

impl EsRepositoryImpl {
    #[doc = "Elasticsearch connection 생성자"]
    /// # Arguments
    /// * `hosts`       - Elasticsearch host 주소 벡터 (`host:port`)
    /// * `es_id`       - Elasticsearch 계정정보 - 아이디 (empty means no auth)
    /// * `es_pw`       - Elasticsearch 계정정보 - 비밀번호
    /// * `timeout_sec` - transport timeout
    ///
    /// # Returns
    /// * Result<Self, anyhow::Error>
    pub fn new(
        hosts: Vec<String>,
        es_id: &str,
        es_pw: &str,
        timeout_sec: u64,
    ) -> Result<Self, anyhow::Error> {
        let es_id_opt: Option<String> = (!es_id.is_empty()).then(|| es_id.to_string());
        let es_pw_opt: Option<String> = (!es_pw.is_empty()).then(|| es_pw.to_string());

        let es_client: Elasticsearch = Self::create_es_conn_pool(
            &hosts,
            es_id_opt.as_deref(),
            es_pw_opt.as_deref(),
            timeout_sec,
        )
        .map_err(|e| anyhow!("[EsRepositoryImpl::new] {:?}", e))?;

        Ok(Self {
            es_client,
            hosts,
            es_id: es_id_opt,
            es_pw: es_pw_opt,
        })
    }

    #[doc = "Function that creates an Elasticsearch connection pool."]
    fn create_es_conn_pool(
        hosts: &[String],
        es_id_opt: Option<&str>,
        es_pw_opt: Option<&str>,
        timeout_sec: u64,
    ) -> anyhow::Result<Elasticsearch> {
        let cluster_urls: Vec<Url> = hosts
            .iter()
            .map(|host| Url::parse(&format!("http://{}", host)))
            .collect::<Result<_, _>>()
            .map_err(|e| anyhow!("[EsRepositoryImpl::create_es_conn_pool][cluster_urls] {:?}", e))?;

        if cluster_urls.is_empty() {
            return Err(anyhow!(
                "[EsRepositoryImpl::create_es_conn_pool] at least one host is required"
            ));
        }

        let conn_pool: MultiNodeConnectionPool =
            MultiNodeConnectionPool::round_robin(cluster_urls, None);

        let mut builder: TransportBuilder =
            TransportBuilder::new(conn_pool).timeout(Duration::from_secs(timeout_sec));

        if let (Some(id), Some(pw)) = (es_id_opt, es_pw_opt) {
            builder = builder.auth(EsCredentials::Basic(id.to_string(), pw.to_string()));
        }

        let transport: EsTransport = builder
            .build()
            .map_err(|e| anyhow!("[EsRepositoryImpl::create_es_conn_pool] {:?}", e))?;

        Ok(Elasticsearch::new(transport))
    }

    #[doc = "Helper function to check the connection status of a single node."]
    /// # Arguments
    /// * `url` - Host address to check
    ///
    /// # Returns
    /// * bool - connection success status
    async fn check_single_node_connection(url: Url) -> bool {
        match Client::builder().timeout(Duration::from_secs(5)).build() {
            Ok(client) => match client.get(url).send().await {
                Ok(response) => response.status().is_success(),
                Err(_) => false,
            },
            Err(_) => false,
        }
    }

    #[doc = "Function that create elasticsearch url"]
    fn build_es_url(host: &str, es_id: Option<&str>, es_pw: Option<&str>) -> anyhow::Result<Url> {
        let url: String = match (es_id, es_pw) {
            (Some(id), Some(pw)) => {
                format!("http://{}:{}@{}", id, pw, host)
            }
            _ => {
                format!("http://{}", host)
            }
        };

        Url::parse(&url).map_err(|e| anyhow!("[build_es_url] invalid url: {}", e))
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "특정 인덱스에 search 쿼리를 실행하고 응답 본문을 그대로 반환해주는 함수"]
    /// # Arguments
    /// * `es_query`   - Elasticsearch 쿼리
    /// * `index_name` - 인덱스 이름
    ///
    /// # Returns
    /// * Result<String, anyhow::Error> - raw JSON response, or the backend error envelope
    async fn get_search_raw(&self, es_query: &Value, index_name: &str) -> anyhow::Result<String> {
        let response: Response = self
            .es_client
            .search(SearchParts::Index(&[index_name]))
            .body(es_query)
            .send()
            .await?;

        let status_code: StatusCode = response.status_code();
        let response_body: String = response.text().await?;

        if status_code.is_success() {
            Ok(response_body)
        } else {
            Err(convert_backend_error(&status_code.to_string(), &response_body))
        }
    }

    #[doc = "Elasticsearch 각 노드들이 현재 문제 없이 통신이 되는지 체크해주는 함수."]
    /// # Returns
    /// * Vec<(String, bool)> - 각 호스트별 연결 상태
    async fn get_node_conn_check(&self) -> Vec<(String, bool)> {
        let mut futures = FuturesUnordered::new();

        let es_id: Option<&str> = self.es_id.as_deref();
        let es_pw: Option<&str> = self.es_pw.as_deref();

        for host in self.hosts() {
            let host: String = host.clone();

            let url_result: Result<Url, anyhow::Error> = Self::build_es_url(&host, es_id, es_pw);

            futures.push(async move {
                match url_result {
                    Ok(es_cluster_url) => {
                        let is_connected: bool =
                            Self::check_single_node_connection(es_cluster_url).await;
                        (host, is_connected)
                    }
                    Err(e) => {
                        warn!(
                            "[EsRepositoryImpl::get_node_conn_check] invalid url for host {}: {:?}",
                            host, e
                        );
                        (host, false)
                    }
                }
            });
        }

        let mut results: Vec<(String, bool)> = Vec::new();

        while let Some(result) = futures.next().await {
            results.push(result);
        }

        results
    }
}

#[doc = "Function that initializes the Elasticsearch client holding the span indices"]
/// # Returns
/// * Result<EsRepositoryImpl, anyhow::Error>
pub fn initialize_db_client() -> anyhow::Result<EsRepositoryImpl> {
    let elastic_config: Arc<ElasticConfig> = get_elastic_config_info();

    EsRepositoryImpl::new(
        elastic_config.hosts().clone(),
        elastic_config.es_id(),
        elastic_config.es_pw(),
        *elastic_config.timeout_sec(),
    )
}
