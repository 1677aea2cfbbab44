//! Test helpers.

use std::io;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

use crate::config::ApiConfig;

/// Origin nothing listens on.
pub(crate) const UNREACHABLE_ORIGIN: &str = "http://127.0.0.1:1";

/// What the backend stub received.
#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) body: String,
}

/// Local backend answering exactly one request with a canned JSON response.
#[derive(Debug)]
pub(crate) struct StubBackend {
    config: ApiConfig,
    handle: JoinHandle<io::Result<RecordedRequest>>,
}

impl StubBackend {
    pub(crate) async fn respond(status: u16, body: &str) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let origin = format!("http://{}/", listener.local_addr()?);
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await?;
            let request = read_request(&mut stream).await?;

            let response = format!(
                "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );

            stream.write_all(response.as_bytes()).await?;
            stream.shutdown().await?;

            Ok(request)
        });

        Ok(Self {
            config: ApiConfig::new(origin),
            handle,
        })
    }

    pub(crate) fn config(&self) -> ApiConfig {
        self.config.clone()
    }

    /// Wait for the stub to finish and return the request it served.
    pub(crate) async fn request(self) -> io::Result<RecordedRequest> {
        self.handle.await.map_err(io::Error::other)?
    }
}

async fn read_request(stream: &mut TcpStream) -> io::Result<RecordedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    let head_end = loop {
        if let Some(end) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break end;
        }

        let read = stream.read(&mut chunk).await?;

        if read == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        buffer.extend_from_slice(&chunk[..read]);
    };

    let head = String::from_utf8_lossy(&buffer[..head_end]).into_owned();
    let body_start = head_end + 4;
    let length = content_length(&head);

    while buffer.len() < body_start + length {
        let read = stream.read(&mut chunk).await?;

        if read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..read]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();

    Ok(RecordedRequest {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buffer[body_start..]).into_owned(),
    })
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
