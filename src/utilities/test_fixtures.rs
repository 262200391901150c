use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

#[derive(Clone)]
pub struct RecordedRequest {
    pub head: String,
    pub body: String,
}

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn evaluate_url(&self) -> Url {
        Url::parse(&format!("http://{}/api/evaluate", self.addr)).unwrap()
    }

    pub fn health_url(&self) -> Url {
        Url::parse(&format!("http://{}/health", self.addr)).unwrap()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> RecordedRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

/// Serves one canned response per accepted connection, recording each request.
pub async fn http_server(responses: Vec<String>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    tokio::spawn(async move {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };

            let request = read_request(&mut stream).await;
            recorded.lock().unwrap().push(request);

            stream.write_all(response.as_bytes()).await.ok();
            stream.shutdown().await.ok();
        }
    });

    MockServer { addr, requests }
}

pub fn json_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

pub fn success_response() -> String {
    json_response(
        "200 OK",
        r#"{"success": true, "svg": "<svg><circle r=\"5\"/></svg>", "elementos": ["1", "4", "7"], "regiones": ["A∩¬B∩¬C"], "explicacion": "Unión de A y B"}"#,
    )
}

async fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut buffer = Vec::new();

    let header_end = loop {
        let mut chunk = [0; 1024];
        let read = stream.read(&mut chunk).await.unwrap();
        assert!(read > 0, "the connection closed before the headers were complete");
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break position + 4;
        }
    };

    let head = String::from_utf8(buffer[..header_end].to_vec()).unwrap();
    let content_length = head
        .lines()
        .find_map(|line| {
            line.to_ascii_lowercase().strip_prefix("content-length:").map(str::to_string)
        })
        .map_or(0, |value| value.trim().parse().unwrap());

    while buffer.len() < header_end + content_length {
        let mut chunk = [0; 1024];
        let read = stream.read(&mut chunk).await.unwrap();
        assert!(read > 0, "the connection closed before the body was complete");
        buffer.extend_from_slice(&chunk[..read]);
    }

    let body = String::from_utf8(buffer[header_end..header_end + content_length].to_vec()).unwrap();

    RecordedRequest { head, body }
}
