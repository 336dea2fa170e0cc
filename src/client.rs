//! Population API Client
//!
//! HTTP client for the tesseract population endpoint. One request per call;
//! no retries and no timeout.

use reqwest::Client;

use crate::config::SourceConfig;
use crate::population::{parse_population, FetchError, FetchResult, PopulationRecord};

/// Client for the population endpoint
pub struct DataUsaClient {
    client: Client,
    config: SourceConfig,
}

impl DataUsaClient {
    /// Create a new client with the given source configuration
    pub fn new(config: SourceConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch all records and keep those of the configured nation
    pub async fn fetch_population(&self) -> FetchResult<Vec<PopulationRecord>> {
        tracing::debug!(url = %self.config.url, "Fetching population data");

        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let records = parse_population(&body, &self.config.nation)?;

        tracing::info!(
            count = records.len(),
            nation = %self.config.nation,
            "Fetched population records"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single HTTP response on a local port and return its URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/tesseract/data.jsonrecords", addr)
    }

    fn client_for(url: String) -> DataUsaClient {
        DataUsaClient::new(SourceConfig {
            url,
            ..SourceConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_filters_nation() {
        let url = serve_once(
            "200 OK",
            r#"{"data": [
                {"Nation ID": "01000US", "Nation": "United States", "Year": 2021, "Total Population": 329725481},
                {"Nation ID": "04000US72", "Nation": "Puerto Rico", "Year": 2021, "Total Population": 3263584},
                {"Nation ID": "01000US", "Nation": "United States", "Year": 2022, "Total Population": 331097593}
            ]}"#,
        )
        .await;

        let records = client_for(url).fetch_population().await.unwrap();
        let years: Vec<i64> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2021, 2022]);
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let url = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;
        let err = client_for(url).fetch_population().await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once("200 OK", r#"{"rows": []}"#).await;
        let err = client_for(url).fetch_population().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(format!("http://{}/", addr))
            .fetch_population()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
