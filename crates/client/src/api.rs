use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

use model::{Detail, HotKeyword, IdentifyResult, Portrait, RankItem, ResultItem};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::params::{PortraitQuery, RankingQuery, SearchQuery};

/// Typed client over the catalog backend's JSON endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/hot`
    pub async fn hot(&self) -> Result<Vec<HotKeyword>, FetchError> {
        self.get_json("/api/hot", &[]).await
    }

    /// `GET /api/search`
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<ResultItem>, FetchError> {
        self.get_json("/api/search", &query.pairs()).await
    }

    /// `GET /api/ranking`
    pub async fn ranking(&self, query: &RankingQuery) -> Result<Vec<RankItem>, FetchError> {
        self.get_json("/api/ranking", &query.pairs()).await
    }

    /// `GET /api/portrait/{id}`
    pub async fn portrait(
        &self,
        item_id: &str,
        query: &PortraitQuery,
    ) -> Result<Portrait, FetchError> {
        let path = format!("/api/portrait/{item_id}");
        self.get_json(&path, &query.pairs()).await
    }

    /// `GET /api/detail/{id}`
    pub async fn detail(&self, item_id: i64) -> Result<Detail, FetchError> {
        let path = format!("/api/detail/{item_id}");
        self.get_json(&path, &[]).await
    }

    /// `POST /api/identify` with `mode=text`.
    pub async fn identify_text(&self, text: &str) -> Result<IdentifyResult, FetchError> {
        let url = format!("{}/api/identify", self.base_url);
        let body = json!({ "mode": "text", "text": text });
        let response = self.http.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    /// `POST /api/identify` with `mode=file`, multipart body.
    pub async fn identify_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<IdentifyResult, FetchError> {
        let url = format!("{}/api/identify", self.base_url);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("mode", "file")
            .part("file", part);
        let response = self.http.post(&url).multipart(form).send().await?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);
        if !pairs.is_empty() {
            request = request.query(pairs);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    /// Decode a response body, treating any JSON object with an `error`
    /// member as an application-level failure regardless of status code.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        let status = response.status();
        let body = response.text().await?;

        if let Some(message) = Self::error_envelope(&body) {
            return Err(FetchError::Api(message));
        }
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let value: Value = serde_json::from_str(&body)?;
        Ok(serde_json::from_value(value)?)
    }

    fn error_envelope(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_hot_keywords() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hot"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"kw": "可穿戴EEG"}, {"kw": "BCI"}])),
            )
            .mount(&server)
            .await;

        let keywords = client_for(&server).await.hot().await.unwrap();
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].kw, "可穿戴EEG");
    }

    #[tokio::test]
    async fn test_search_sends_all_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("q", "ai"))
            .and(query_param("kind", "patent"))
            .and(query_param("field", ""))
            .and(query_param("country", ""))
            .and(query_param("sort", "rel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let query = SearchQuery {
            q: "ai".to_string(),
            kind: "patent".to_string(),
            ..SearchQuery::default()
        };
        let items = client_for(&server).await.search(&query).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_identify_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/identify"))
            .and(body_json_string(
                json!({"mode": "text", "text": "graph neural networks"}).to_string(),
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"tech": ["GNN"], "product": []})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .identify_text("graph neural networks")
            .await
            .unwrap();
        assert_eq!(result.tech, vec!["GNN"]);
        assert!(result.product.is_empty());
    }

    #[tokio::test]
    async fn test_error_envelope_on_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/identify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "empty_text"})))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .await
            .identify_text("x")
            .await
            .unwrap_err();
        match error {
            FetchError::Api(message) => assert_eq!(message, "empty_text"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_envelope_on_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/detail/9"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not_found"})))
            .mount(&server)
            .await;

        let error = client_for(&server).await.detail(9).await.unwrap_err();
        match error {
            FetchError::Api(message) => assert_eq!(message, "not_found"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hot"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let error = client_for(&server).await.hot().await.unwrap_err();
        match error {
            FetchError::Status { status } => assert_eq!(status.as_u16(), 502),
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hot"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let error = client_for(&server).await.hot().await.unwrap_err();
        assert!(matches!(error, FetchError::Decode(_)));
    }
}
