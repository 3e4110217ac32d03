//! In-memory fakes for exercising tools without a network.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ApiResponse, ClientError, ClientFactory, GistClient, GistScope, ListOptions, ResponseBody};

/// A call observed by [`FakeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Get(String),
    List(GistScope, ListOptions),
}

/// Body that records whether it was read and whether it was dropped.
struct FakeBody {
    data: Option<Vec<u8>>,
    broken: bool,
    stalled: bool,
    drained: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

#[async_trait]
impl ResponseBody for FakeBody {
    async fn read_all(&mut self) -> Result<Vec<u8>, ClientError> {
        if self.stalled {
            futures::future::pending::<()>().await;
        }
        if self.broken {
            return Err(ClientError::other("connection reset while reading body"));
        }
        self.drained.store(true, Ordering::SeqCst);
        Ok(self.data.take().unwrap_or_default())
    }
}

impl Drop for FakeBody {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Scripted [`GistClient`] answering every call with the same response.
pub struct FakeClient {
    status: StatusCode,
    body: Vec<u8>,
    call_error: Option<String>,
    broken_body: bool,
    stalled: bool,
    stalled_body: bool,
    calls: Mutex<Vec<RecordedCall>>,
    drained: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

impl FakeClient {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
            call_error: None,
            broken_body: false,
            stalled: false,
            stalled_body: false,
            calls: Mutex::new(Vec::new()),
            drained: Arc::new(AtomicBool::new(false)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Every call fails before a response exists.
    pub fn failing(message: &str) -> Self {
        Self {
            call_error: Some(message.to_string()),
            ..Self::responding(200, "")
        }
    }

    /// Every call hangs until the caller gives up.
    pub fn stalled() -> Self {
        Self {
            stalled: true,
            ..Self::responding(200, "")
        }
    }

    /// Responses arrive but reading their body fails.
    pub fn with_broken_body(mut self) -> Self {
        self.broken_body = true;
        self
    }

    /// Responses arrive but their body never finishes downloading.
    pub fn with_stalled_body(mut self) -> Self {
        self.stalled_body = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn body_drained(&self) -> bool {
        self.drained.load(Ordering::SeqCst)
    }

    pub fn body_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn respond(&self, call: RecordedCall) -> Result<ApiResponse, ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.stalled {
            futures::future::pending::<()>().await;
        }
        if let Some(message) = &self.call_error {
            return Err(ClientError::other(message.clone()));
        }
        Ok(ApiResponse::new(
            self.status,
            FakeBody {
                data: Some(self.body.clone()),
                broken: self.broken_body,
                stalled: self.stalled_body,
                drained: self.drained.clone(),
                closed: self.closed.clone(),
            },
        ))
    }
}

#[async_trait]
impl GistClient for FakeClient {
    async fn get_gist(&self, gist_id: &str) -> Result<ApiResponse, ClientError> {
        self.respond(RecordedCall::Get(gist_id.to_string())).await
    }

    async fn list_gists(
        &self,
        scope: GistScope,
        options: ListOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.respond(RecordedCall::List(scope, options)).await
    }
}

/// [`ClientFactory`] handing out a shared [`FakeClient`], or failing.
pub struct FakeFactory {
    client: Arc<FakeClient>,
    failure: Option<String>,
    acquisitions: AtomicUsize,
}

impl FakeFactory {
    pub fn new(client: FakeClient) -> Self {
        Self {
            client: Arc::new(client),
            failure: None,
            acquisitions: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(FakeClient::responding(200, "{}"))
        }
    }

    /// The client handed out, for inspecting recorded calls.
    pub fn fake(&self) -> &FakeClient {
        &self.client
    }

    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientFactory for FakeFactory {
    async fn client(&self) -> Result<Arc<dyn GistClient>, ClientError> {
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return Err(ClientError::other(message.clone()));
        }
        let client: Arc<dyn GistClient> = self.client.clone();
        Ok(client)
    }
}
