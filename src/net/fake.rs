//! Scripted transport for exercising auth operations without a browser.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::AuthTransport;
use super::types::ApiResponse;
use crate::error::TransportError;

type Reply = Result<ApiResponse<Value>, TransportError>;

/// One recorded request.
#[derive(Clone, Debug)]
pub(crate) struct Call {
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<Call>>,
    suspend: bool,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request yields to the executor once before answering.
    pub fn suspending(mut self) -> Self {
        self.suspend = true;
        self
    }

    pub fn reply(self, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .entry(path.to_owned())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn ok(self, path: &str, data: Value) -> Self {
        self.reply(
            path,
            Ok(ApiResponse {
                success: true,
                data: Some(data),
                message: None,
            }),
        )
    }

    pub fn ok_empty(self, path: &str) -> Self {
        self.reply(
            path,
            Ok(ApiResponse {
                success: true,
                data: None,
                message: None,
            }),
        )
    }

    pub fn rejected(self, path: &str, message: &str) -> Self {
        self.reply(
            path,
            Ok(ApiResponse {
                success: false,
                data: None,
                message: Some(message.to_owned()),
            }),
        )
    }

    pub fn offline(self, path: &str) -> Self {
        self.reply(path, Err(TransportError::Network("connection refused".to_owned())))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.path).collect()
    }

    async fn answer<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<ApiResponse<T>, TransportError> {
        self.calls.lock().expect("calls lock").push(Call {
            path: path.to_owned(),
            body,
        });
        if self.suspend {
            YieldOnce(false).await;
        }
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::Network(format!("no reply scripted for {path}"))))?;
        let data = reply
            .data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(ApiResponse {
            success: reply.success,
            data,
            message: reply.message,
        })
    }
}

impl AuthTransport for FakeTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, TransportError> {
        self.answer(path, None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, TransportError> {
        let body = serde_json::to_value(body).expect("serializable body");
        self.answer(path, Some(body)).await
    }
}

/// Returns `Pending` exactly once, waking itself immediately.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
