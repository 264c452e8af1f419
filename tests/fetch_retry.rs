use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use bookscrape::fetch::{FetchConfig, Fetcher};
use url::Url;

fn spawn_flaky_server(
    failures_before_success: usize,
) -> (
    String,
    Arc<AtomicUsize>,
    mpsc::Sender<()>,
    thread::JoinHandle<()>,
) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
    let addr = server.server_addr();
    let base_url = format!("http://{addr}");

    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let n = seen.fetch_add(1, Ordering::SeqCst);
            let response = if n < failures_before_success {
                tiny_http::Response::from_string("upstream exploded").with_status_code(500)
            } else {
                tiny_http::Response::from_string("<html><body><h1>v poriadku</h1></body></html>")
            };
            let _ = request.respond(response);
        }
    });

    (base_url, hits, shutdown_tx, handle)
}

fn test_fetcher(max_tries: u32) -> Fetcher {
    Fetcher::new(FetchConfig {
        delay_min_ms: 0,
        delay_max_ms: 0,
        max_tries,
    })
    .expect("build fetcher")
}

#[tokio::test]
async fn returns_a_document_after_transient_failures() {
    let (base_url, hits, shutdown_tx, server_handle) = spawn_flaky_server(4);
    let url = Url::parse(&base_url).expect("parse server url");

    let doc = test_fetcher(5).fetch(&url).await;
    assert!(doc.is_some());
    assert_eq!(hits.load(Ordering::SeqCst), 5);

    let _ = shutdown_tx.send(());
    let _ = server_handle.join();
}

#[tokio::test]
async fn gives_up_after_exhausting_retries() {
    let (base_url, hits, shutdown_tx, server_handle) = spawn_flaky_server(usize::MAX);
    let url = Url::parse(&base_url).expect("parse server url");

    let doc = test_fetcher(3).fetch(&url).await;
    assert!(doc.is_none());

    // One initial try plus three retries.
    assert_eq!(hits.load(Ordering::SeqCst), 4);

    let _ = shutdown_tx.send(());
    let _ = server_handle.join();
}
