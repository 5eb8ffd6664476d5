use crate::error::{ClientError, GENERIC_FAILURE};
use crate::session::SessionToken;
use crate::types::ClientConfig;
use kalu_schema::{standard_profiles, Direction, SchemaProfiles, Translator};
use kalu_types::{RecordKind, SchemaError, TokenResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Dashboard API client that speaks external (English) records.
///
/// Outgoing bodies and query parameters are translated to the backend's
/// Portuguese schema; incoming bodies are translated back. The translation
/// profile is picked from the request path. One request per call, never
/// retried.
///
/// ```rust,no_run
/// use kalu_client::{ClientConfig, DashboardClient};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), kalu_client::ClientError> {
/// let client = DashboardClient::new(ClientConfig {
///     base_url: "https://kalu-dashboard-api.onrender.com".into(),
///     ..Default::default()
/// })?;
/// client.login("oscar", "secret").await?;
///
/// let task = client
///     .post("/tasks/", &json!({"title": "Finish Report", "company": "IMPULSO IA", "priority": "High"}))
///     .await?;
/// assert_eq!(task["priority"], "High");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: Url,
    schema: Arc<SchemaProfiles>,
    session: SessionToken,
}

impl DashboardClient {
    /// Create a client using the standard translation profiles.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::with_profiles(config, standard_profiles()?)
    }

    /// Create a client with caller-supplied translation profiles.
    pub fn with_profiles(
        config: ClientConfig,
        schema: Arc<SchemaProfiles>,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { client, base_url, schema, session: SessionToken::new(config.token) })
    }

    /// Token store used for the `Authorization` header.
    pub fn session(&self) -> &SessionToken {
        &self.session
    }

    pub fn schema(&self) -> &SchemaProfiles {
        &self.schema
    }

    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, record: &Value) -> Result<Value, ClientError> {
        self.request(Method::POST, path, Some(record)).await
    }

    pub async fn put(&self, path: &str, record: &Value) -> Result<Value, ClientError> {
        self.request(Method::PUT, path, Some(record)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Send a request with the session token, if any.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        record: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let token = self.session.get();
        self.request_as(token.as_deref(), method, path, record).await
    }

    /// Send a request with an explicit token instead of the session one.
    ///
    /// Returns the translated response body, or `Value::Null` when the body
    /// is empty (e.g. `204 No Content`).
    pub async fn request_as(
        &self,
        token: Option<&str>,
        method: Method,
        path: &str,
        record: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let body = record.map(|r| self.schema.for_path(path).to_internal(r));
        self.send(token, method, path, &[], body.as_ref()).await
    }

    /// Exchange credentials for a bearer token and keep it for later calls.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let url = self.endpoint("/token")?;
        let resp = self
            .client
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let body = read_success(resp).await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        self.session.set(token.access_token.clone());
        tracing::info!(username, "[Dashboard] Logged in");
        Ok(token)
    }

    pub(crate) async fn fetch<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let pairs = query_pairs(self.schema.for_path(path), query)?;
        self.fetch_pairs(path, &pairs).await
    }

    /// Like `fetch`, but the query pairs go out as given, untranslated.
    pub(crate) async fn fetch_pairs<T>(
        &self,
        path: &str,
        pairs: &[(String, String)],
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let token = self.session.get();
        let value = self.send(token.as_deref(), Method::GET, path, pairs, None).await?;
        decode(value)
    }

    pub(crate) async fn submit<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let record =
            self.schema.for_path(path).translate_serializable(body, Direction::ToInternal)?;
        let token = self.session.get();
        let value = self.send(token.as_deref(), method, path, &[], Some(&record)).await?;
        decode(value)
    }

    pub(crate) async fn remove(&self, path: &str) -> Result<(), ClientError> {
        let _ = self.delete(path).await?;
        Ok(())
    }

    /// `body` is already in backend naming.
    async fn send(
        &self,
        token: Option<&str>,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, path, kind = ?RecordKind::from_path(path), "[Dashboard] Sending request");

        let mut req = self.client.request(method, url).header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let text = read_success(req.send().await?).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        let parsed: Value =
            serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(self.schema.for_path(path).to_external(&parsed))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }
}

/// Body text of a 2xx response, or an `Api` error carrying the server's `detail`.
async fn read_success(resp: Response) -> Result<String, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    if status.is_success() {
        return Ok(text);
    }

    let message = error_message(&text);
    tracing::warn!(status = status.as_u16(), %message, "[Dashboard] Request failed");
    Err(ClientError::Api { status: status.as_u16(), message })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(Value::Null) | None => GENERIC_FAILURE.to_string(),
            Some(other) => other.to_string(),
        },
        _ => GENERIC_FAILURE.to_string(),
    }
}

/// Serialize filters, translate their names and values, and flatten to pairs.
fn query_pairs<Q>(translator: &Translator, query: &Q) -> Result<Vec<(String, String)>, ClientError>
where
    Q: Serialize + ?Sized,
{
    match translator.translate_serializable(query, Direction::ToInternal)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect()),
        _ => Err(SchemaError::MalformedInput {
            message: "query parameters must serialize to an object".to_string(),
        }
        .into()),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kalu_types::{DocumentFilter, TaskFilter, TaskStatus};

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(error_message(r#"{"detail": "Tarefa não encontrada"}"#), "Tarefa não encontrada");
        assert_eq!(error_message(r#"{"detail": null}"#), GENERIC_FAILURE);
        assert_eq!(error_message("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(error_message(""), GENERIC_FAILURE);
    }

    #[test]
    fn test_error_message_renders_structured_detail() {
        let msg = error_message(r#"{"detail": [{"loc": ["body", "titulo"], "msg": "field required"}]}"#);
        assert!(msg.contains("field required"));
    }

    #[test]
    fn test_query_pairs_are_translated() {
        let profiles = standard_profiles().unwrap();
        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            company: Some("IMPULSO IA".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let pairs = query_pairs(profiles.for_path("/tasks/"), &filter).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("status".to_string(), "Em Progresso".to_string()),
                ("empresa".to_string(), "IMPULSO IA".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_use_path_profile() {
        let profiles = standard_profiles().unwrap();
        let filter = DocumentFilter { doc_type: Some("HTML".to_string()), ..Default::default() };
        let pairs = query_pairs(profiles.for_path("/documents/"), &filter).unwrap();
        assert_eq!(pairs, vec![("tipo".to_string(), "HTML".to_string())]);
    }

    #[test]
    fn test_query_pairs_reject_non_objects() {
        let profiles = standard_profiles().unwrap();
        let err = query_pairs(profiles.general(), &["a", "b"]).unwrap_err();
        assert!(matches!(err, ClientError::Schema(SchemaError::MalformedInput { .. })));
        assert!(query_pairs(profiles.general(), &()).unwrap().is_empty());
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let client = DashboardClient::new(ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint("/tasks/").unwrap().as_str(), "http://localhost:8000/tasks/");
        assert_eq!(client.endpoint("health").unwrap().as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = DashboardClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
