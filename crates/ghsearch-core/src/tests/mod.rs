//! Test helpers.


use std::{
    collections::VecDeque,
    io::Write,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use ghsearch_ghapi_interface::{Transport, TransportError, TransportResponse};
use tokio::sync::oneshot;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use url::Url;

/// Log lines captured by a thread-local subscriber.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Capture `info` and above on the current thread until the guard drops.
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

enum StubReply {
    Response(TransportResponse),
    Error(TransportError),
    Gated(oneshot::Receiver<()>, TransportResponse),
}

/// In-memory transport replaying queued replies in FIFO order.
#[derive(Default)]
pub(crate) struct StubTransport {
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<StubReply>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: TransportResponse) {
        self.push(StubReply::Response(response));
    }

    pub fn push_error(&self, error: TransportError) {
        self.push(StubReply::Error(error));
    }

    /// Queue a response only delivered once the returned sender fires.
    pub fn push_gated_response(&self, response: TransportResponse) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(StubReply::Gated(rx, response));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// Yield until the transport received `count` calls.
    pub async fn wait_for_calls(&self, count: usize) {
        while self.calls() < count {
            tokio::task::yield_now().await;
        }
    }

    fn push(&self, reply: StubReply) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.urls.lock().unwrap().push(url.to_string());
        let reply = self.replies.lock().unwrap().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);

        match reply {
            Some(StubReply::Response(response)) => Ok(response),
            Some(StubReply::Error(error)) => Err(error),
            Some(StubReply::Gated(gate, response)) => match gate.await {
                Ok(()) => Ok(response),
                Err(_) => Err(TransportError::Cancelled),
            },
            None => Err(TransportError::Other {
                message: format!("no stubbed reply for {url}"),
            }),
        }
    }
}
