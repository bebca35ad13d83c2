use crate::config::ClientConfig;
use crate::error::{AdminClientError, Result};
use crate::models::*;
use crate::AdminApi;
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build configured http client, using defaults");
            Client::new()
        });

        Self {
            client,
            base_url: config.base_url,
            token: config.token,
        }
    }

    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    fn add_auth_header(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Maps non-2xx responses onto the error taxonomy, preferring the
    /// envelope `message` over the raw body when there is one.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await?;
        let detail = envelope_message(&error_text).unwrap_or(error_text);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AdminClientError::Unauthorized(detail))
            }
            StatusCode::NOT_FOUND => Err(AdminClientError::NotFound),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(AdminClientError::InvalidRequest(detail))
            }
            _ => Err(AdminClientError::TransportError(format!(
                "HTTP {}: {}",
                status, detail
            ))),
        }
    }

    async fn handle_data_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;

        if !envelope.success {
            return Err(rejected(envelope.message));
        }

        envelope.data.ok_or_else(|| {
            AdminClientError::SerializationError("response envelope carries no data".into())
        })
    }

    /// Mutations succeed on any 2xx unless the body is an envelope saying otherwise.
    async fn handle_ack_response(response: Response) -> Result<()> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;

        if text.trim().is_empty() {
            return Ok(());
        }

        match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text) {
            Ok(envelope) if !envelope.success => Err(rejected(envelope.message)),
            _ => Ok(()),
        }
    }
}

fn envelope_message(text: &str) -> Option<String> {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(text)
        .ok()
        .and_then(|envelope| envelope.message)
}

fn rejected(message: Option<String>) -> AdminClientError {
    AdminClientError::Rejected(message.unwrap_or_else(|| "request was not successful".into()))
}

#[async_trait(?Send)]
impl AdminApi for HttpClient {
    async fn list_blogs(&self, filter: StatusFilter<PostStatus>) -> Result<Vec<Post>> {
        let url = self.url("/blog/admin/all");
        let mut request = self.add_auth_header(self.client.get(&url));

        if let Some(status) = filter.status() {
            request = request.query(&[("status", status.as_str())]);
        }

        tracing::debug!(status = filter.as_query_value(), "listing blog posts");
        let response = request.send().await?;
        let list: BlogList = Self::handle_data_response(response).await?;
        tracing::debug!(count = list.blogs.len(), "blog posts received");

        Ok(list.blogs)
    }

    async fn delete_blog(&self, id: &PostId) -> Result<()> {
        let url = self.url(&format!("/blog/admin/{}", id));
        tracing::debug!(%id, "deleting blog post");

        let response = self
            .add_auth_header(self.client.delete(&url))
            .send()
            .await?;

        Self::handle_ack_response(response).await
    }

    async fn list_subscribers(&self, query: &SubscriberQuery) -> Result<SubscriberPage> {
        let url = self.url("/admin/newsletter");
        let page = query.page.to_string();

        tracing::debug!(
            page = query.page,
            status = query.status.as_query_value(),
            "listing subscribers"
        );

        let response = self
            .add_auth_header(self.client.get(&url))
            .query(&[
                ("page", page.as_str()),
                ("status", query.status.as_query_value()),
            ])
            .send()
            .await?;

        Self::handle_data_response(response).await
    }

    async fn delete_subscriber(&self, id: &SubscriberId) -> Result<()> {
        let url = self.url(&format!("/admin/newsletter/{}", id));
        tracing::debug!(%id, "deleting subscriber");

        let response = self
            .add_auth_header(self.client.delete(&url))
            .send()
            .await?;

        Self::handle_ack_response(response).await
    }

    async fn update_subscriber_status(
        &self,
        id: &SubscriberId,
        status: SubscriberStatus,
    ) -> Result<()> {
        let url = self.url(&format!("/admin/newsletter/{}/status", id));
        let request = UpdateStatusRequest { status };
        tracing::debug!(%id, status = status.as_str(), "updating subscriber status");

        let response = self
            .add_auth_header(self.client.put(&url))
            .json(&request)
            .send()
            .await?;

        Self::handle_ack_response(response).await
    }

    async fn export_subscribers(&self) -> Result<Vec<u8>> {
        let url = self.url("/admin/newsletter/export");
        tracing::debug!("exporting subscribers");

        let response = self.add_auth_header(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let bytes = response.bytes().await?.to_vec();

        // Some backends answer a failed export with a JSON envelope and 200.
        if is_json {
            if let Ok(envelope) = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes) {
                if !envelope.success {
                    return Err(rejected(envelope.message));
                }
            }
        }

        tracing::debug!(bytes = bytes.len(), "subscriber export received");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = HttpClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.url("/admin/newsletter"),
            "http://localhost:5000/api/admin/newsletter"
        );
        assert_eq!(
            client.url("blog/admin/all"),
            "http://localhost:5000/api/blog/admin/all"
        );
    }

    #[test]
    fn token_comes_from_config() {
        let client = HttpClient::with_config(ClientConfig::new("http://x").with_token("t"));
        assert_eq!(client.get_token().map(String::as_str), Some("t"));
        assert!(HttpClient::new("http://x").get_token().is_none());
    }

    #[test]
    fn envelope_message_is_extracted() {
        assert_eq!(
            envelope_message(r#"{"success":false,"message":"Subscriber not found"}"#).as_deref(),
            Some("Subscriber not found")
        );
        assert!(envelope_message("<html>bad gateway</html>").is_none());
    }
}
