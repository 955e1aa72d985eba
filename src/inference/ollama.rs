// Ollama-compatible HTTP backend
use crate::inference::traits::{CompletionRequest, InferenceBackend};
use crate::model::InferenceError;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

pub struct OllamaBackend {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    preflight_timeout: Duration,
}

impl OllamaBackend {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        preflight_timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .user_agent(concat!("pantry-sort/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url, request_timeout, preflight_timeout))
    }

    fn with_client(
        client: Client,
        base_url: &str,
        request_timeout: Duration,
        preflight_timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout,
            preflight_timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl InferenceBackend for OllamaBackend {
    async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
        let url = self.url("/api/tags");
        let body = with_deadline(self.preflight_timeout, async {
            let response = self.client.get(&url).send().await?;
            read_success_body(response).await
        })
        .await?;

        let tags: TagsResponse =
            serde_json::from_str(&body).map_err(|e| InferenceError::Decode(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, InferenceError> {
        let url = self.url("/api/chat");
        let payload = ChatRequest::from(request);
        let body = with_deadline(self.request_timeout, async {
            let response = self.client.post(&url).json(&payload).send().await?;
            read_success_body(response).await
        })
        .await?;

        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(|e| InferenceError::Decode(e.to_string()))?;
        debug!("Chat answer: {} chars", chat.message.content.len());
        Ok(chat.message.content.trim().to_string())
    }
}

/// Bounds the whole exchange, body included, by one absolute deadline.
async fn with_deadline<F>(limit: Duration, call: F) -> Result<String, InferenceError>
where
    F: Future<Output = Result<String, InferenceError>>,
{
    match timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(InferenceError::Timeout),
    }
}

async fn read_success_body(response: Response) -> Result<String, InferenceError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(InferenceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: [ChatMessage<'a>; 2],
    options: ChatOptions,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            stream: false,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            options: ChatOptions {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatAnswer,
}

#[derive(Debug, Deserialize)]
struct ChatAnswer {
    content: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    #[test]
    fn chat_payload_shape() {
        let request = CompletionRequest {
            model: "llama3.2:1b".into(),
            system: "be terse".into(),
            user: "1. Name: Saffron".into(),
            temperature: 0.0,
        };
        let value = serde_json::to_value(ChatRequest::from(&request)).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "llama3.2:1b",
                "stream": false,
                "messages": [
                    {"role": "system", "content": "be terse"},
                    {"role": "user", "content": "1. Name: Saffron"}
                ],
                "options": {"temperature": 0.0}
            })
        );
    }

    #[test]
    fn decodes_tags_and_chat_envelopes() {
        let tags: TagsResponse = serde_json::from_str(
            r#"{"models": [{"name": "llama3.2:1b", "size": 1}, {"name": "qwen2.5:latest"}]}"#,
        )
        .unwrap();
        let names: Vec<String> = tags.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["llama3.2:1b", "qwen2.5:latest"]);

        let empty: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.models.is_empty());

        let chat: ChatResponse = serde_json::from_str(
            r#"{"model": "llama3.2:1b", "message": {"role": "assistant", "content": " [] "}, "done": true}"#,
        )
        .unwrap();
        assert_eq!(chat.message.content, " [] ");
    }

    /// Backend that talks to `base_url` directly, ignoring proxy settings.
    fn local_backend(base_url: &str, request_timeout: Duration) -> OllamaBackend {
        let client = Client::builder().no_proxy().build().unwrap();
        OllamaBackend::with_client(client, base_url, request_timeout, Duration::from_secs(2))
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "llama3.2:1b".into(),
            system: "be terse".into(),
            user: "1. Name: Saffron".into(),
            temperature: 0.0,
        }
    }

    /// Reads one request, headers and body, off the socket.
    async fn read_request(socket: &mut TcpStream) {
        let mut received = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            received.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&received);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if received.len() >= end + 4 + length {
                    return;
                }
            }
        }
    }

    /// Answers a single exchange with a canned response; returns the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn unreachable_backend_fails_preflight() {
        let backend = local_backend("http://127.0.0.1:9/", Duration::from_secs(2));
        assert_eq!(backend.url("/api/tags"), "http://127.0.0.1:9/api/tags");
        assert!(backend.list_models().await.is_err());
    }

    #[tokio::test]
    async fn chat_answer_is_trimmed_content() {
        let base = serve_once(
            "200 OK",
            r#"{"model": "llama3.2:1b", "message": {"role": "assistant", "content": " [] "}}"#,
        )
        .await;
        let backend = local_backend(&base, Duration::from_secs(5));
        assert_eq!(backend.complete(&request()).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn tags_are_listed() {
        let base = serve_once("200 OK", r#"{"models": [{"name": "llama3.2:1b"}]}"#).await;
        let backend = local_backend(&base, Duration::from_secs(5));
        assert_eq!(backend.list_models().await.unwrap(), vec!["llama3.2:1b"]);
    }

    #[tokio::test]
    async fn server_error_becomes_status_failure() {
        let base = serve_once("500 Internal Server Error", "model crashed").await;
        let backend = local_backend(&base, Duration::from_secs(5));
        match backend.complete(&request()).await {
            Err(InferenceError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "model crashed");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn silent_server_hits_the_deadline() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        });

        let backend = local_backend(&base, Duration::from_millis(50));
        let started = std::time::Instant::now();
        let outcome = backend.complete(&request()).await;
        assert!(matches!(outcome, Err(InferenceError::Timeout)), "{:?}", outcome);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
