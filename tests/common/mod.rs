//! Minimal canned-response HTTP server for exercising the fetchers offline.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wordbank::{CorpusClient, Endpoints};

pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: "upstream error".to_string(),
        }
    }
}

type Handler = dyn Fn(&str) -> Reply + Send + Sync;

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Serves every request with `handler(path_and_query)`.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<Handler> = Arc::new(handler);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let handler = Arc::clone(&handler);
                let recorded = Arc::clone(&recorded);

                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&buf);
                    let path = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    recorded.lock().unwrap().push(path.clone());

                    let reply = handler(&path);
                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        reply.status,
                        reply.content_type,
                        reply.body.len(),
                        reply.body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn client(&self) -> CorpusClient {
        // Bypass any proxy configured in the environment; the server is local.
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        CorpusClient::from_parts(
            http,
            Endpoints {
                random_words: format!("{}/api", self.base_url),
                folger_texts: self.base_url.clone(),
            },
        )
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// A fake play page with `count` numbered words spread over several lines.
pub fn play_page(count: usize) -> String {
    let lines: Vec<String> = (0..count)
        .collect::<Vec<_>>()
        .chunks(7)
        .map(|chunk| {
            let words: Vec<String> = chunk.iter().map(|i| format!("w{}", i)).collect();
            format!("<div class=\"line\">{}</div>", words.join(" "))
        })
        .collect();

    format!(
        "<html><head><title>Play</title><script>var x = 1;</script></head>\
         <body><style>.line {{ margin: 0 }}</style>{}</body></html>",
        lines.join("\n")
    )
}
