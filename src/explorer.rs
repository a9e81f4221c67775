use log::debug;
use reqwest::{header::USER_AGENT, Client, StatusCode};

const STATUS: &str = "explorer";
const CHAIN_FACTS: &str = "explorer/custodyfees/metrics/chain";

/// Client for the explorer HTTP API.
///
/// Only a `200 OK` response is handed back; any other status yields `None`.
pub struct Explorer {
    client: Client,
    base: String,
    user_agent: String,
}

impl Explorer {
    pub fn new(base: &str, user_agent: &str) -> Self {
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    async fn get_response(&self, path: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/{}", self.base, path);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!("GET {} returned {}, skipping", url, response.status());
            return Ok(None);
        }

        response.text().await.map(Some)
    }

    pub async fn status(&self) -> Result<Option<String>, reqwest::Error> {
        self.get_response(STATUS).await
    }

    pub async fn chain_facts(&self) -> Result<Option<String>, reqwest::Error> {
        self.get_response(CHAIN_FACTS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_body_on_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/explorer"))
            .and(header("User-Agent", "Rivine-Agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let explorer = Explorer::new(&server.uri(), "Rivine-Agent");
        let body = explorer.status().await.unwrap();

        assert_eq!(body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn ignores_other_statuses() {
        let server = MockServer::start().await;
        for status in [201, 204, 404, 500] {
            server.reset().await;
            Mock::given(method("GET"))
                .and(path("/explorer/custodyfees/metrics/chain"))
                .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
                .mount(&server)
                .await;

            let explorer = Explorer::new(&server.uri(), "Rivine-Agent");
            assert!(explorer.chain_facts().await.unwrap().is_none(), "status {}", status);
        }
    }

    #[tokio::test]
    async fn trims_trailing_slash() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/explorer"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let explorer = Explorer::new(&format!("{}/", server.uri()), "agent");

        assert_eq!(explorer.status().await.unwrap().as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        let explorer = Explorer::new("http://127.0.0.1:1", "Rivine-Agent");

        assert!(explorer.status().await.is_err());
    }
}
