//! End-to-end over a real socket: HTTP/1.1 written by hand, one request per
//! connection.

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use marquee::{MovieStore, Server, api};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct Running {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), marquee::Error>>,
}

async fn start() -> Running {
    let server = Server::bind("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr();
    let (stop, stopped) = oneshot::channel::<()>();
    let app = api::routes(Arc::new(MovieStore::seeded()));
    let handle = tokio::spawn(server.serve_with_shutdown(app, async {
        let _ = stopped.await;
    }));
    Running { addr, stop, handle }
}

/// Sends one request and returns the status code and body.
async fn send(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{method} {path} HTTP/1.1\r\nhost: {addr}\r\nconnection: close\r\n\
         content-type: application/json\r\ncontent-length: {}\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status = head.split(' ').nth(1).unwrap().parse().unwrap();
    (status, body.to_owned())
}

#[tokio::test]
async fn serves_the_catalog_and_shuts_down() {
    let server = start().await;

    let (status, body) = send(server.addr, "GET", "/getAllMovies", "").await;
    assert_eq!(status, 200);
    assert!(body.contains("\"Director\": \"Shankar\""), "{body}");

    let (status, _) = send(
        server.addr,
        "POST",
        "/addMovie",
        r#"{"entryNo":4,"movieName":"Magadheera","Director":"Rajamouli","yearOfRelease":2009}"#,
    )
    .await;
    assert_eq!(status, 201);

    let (status, body) = send(server.addr, "GET", "/getMovieByYearOfRelease/2009", "").await;
    assert_eq!(status, 200);
    assert!(body.contains("Magadheera"), "{body}");

    let (status, body) = send(server.addr, "DELETE", "/deleteMovieByEntryNo/4", "").await;
    assert_eq!(status, 200);
    assert_eq!(body, "\"Movie record Deleted Successfully\"");

    let (status, body) = send(server.addr, "GET", "/getMovieByDirectorName/spielberg", "").await;
    assert_eq!(status, 404);
    assert!(body.contains("No Movies Found"), "{body}");

    server.stop.send(()).unwrap();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn unknown_method_is_not_found() {
    let server = start().await;

    let (status, body) = send(server.addr, "PROPFIND", "/getAllMovies", "").await;
    assert_eq!(status, 404);
    assert_eq!(body, "404 page not found");

    server.stop.send(()).unwrap();
    server.handle.await.unwrap().unwrap();
}

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn requests_answered_by_the_server_are_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = start().await;
    let (status, _) = send(server.addr, "PROPFIND", "/getAllMovies", "").await;
    assert_eq!(status, 404);
    let (status, _) = send(server.addr, "GET", "/getAllMovies", "").await;
    assert_eq!(status, 200);

    server.stop.send(()).unwrap();
    server.handle.await.unwrap().unwrap();

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("method=PROPFIND"), "{logs}");
    assert!(logs.contains("status=404"), "{logs}");
    assert!(logs.contains("method=GET"), "{logs}");
    assert!(logs.contains("status=200"), "{logs}");
}
