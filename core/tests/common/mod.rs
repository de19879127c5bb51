//! HTTP server for end-to-end tests
//!
//! Answers every request with a status picked by a responder closure that
//! is given the 0-based index of the request. Runs a `tiny_http` server on
//! a background thread; connections are kept alive so pooled clients can
//! reuse them.

#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Cursor;
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

type Responder = Box<dyn Fn(usize) -> u16 + Send + 'static>;

pub struct TestServer {
    addr: SocketAddr,
    server: Arc<tiny_http::Server>,
    hits: Arc<AtomicUsize>,
    peers: Arc<Mutex<HashSet<SocketAddr>>>,
}

impl TestServer {
    /// Start a server that answers with `responder(request_index)`
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(usize) -> u16 + Send + 'static,
    {
        Self::start_with_body(responder, b"ok".to_vec())
    }

    /// Start a server that always answers `status`
    pub fn always(status: u16) -> Self {
        Self::start(move |_| status)
    }

    /// Start a server with a custom response body
    pub fn start_with_body<F>(responder: F, body: Vec<u8>) -> Self
    where
        F: Fn(usize) -> u16 + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = Arc::new(tiny_http::Server::from_listener(listener, None).unwrap());

        let hits = Arc::new(AtomicUsize::new(0));
        let peers = Arc::new(Mutex::new(HashSet::new()));

        {
            let server = server.clone();
            let hits = hits.clone();
            let peers = peers.clone();
            let responder: Responder = Box::new(responder);

            thread::spawn(move || {
                for request in server.incoming_requests() {
                    if let Some(peer) = request.remote_addr() {
                        peers.lock().unwrap().insert(*peer);
                    }

                    let status = responder(hits.fetch_add(1, Ordering::SeqCst));
                    request.respond(response(status, &body)).ok();
                }
            });
        }

        Self {
            addr,
            server,
            hits,
            peers,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Requests answered so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Distinct client connections seen so far
    pub fn connections(&self) -> usize {
        self.peers.lock().unwrap().len()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

/// A URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

/// Statuses that must not carry a body
fn bodiless(status: u16) -> bool {
    (100..200).contains(&status) || status == 204 || status == 304
}

fn response(status: u16, body: &[u8]) -> tiny_http::Response<Cursor<Vec<u8>>> {
    let data = if bodiless(status) {
        Vec::new()
    } else {
        body.to_vec()
    };

    tiny_http::Response::from_data(data).with_status_code(status)
}
