//! Scripted transport shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use brickbybrick_core::{ClientConfig, ClientError, HttpRequest, HttpResponse, Session, Transport};

/// Replays canned responses in order and records every request.
#[derive(Default)]
pub(crate) struct Scripted {
    responses: Mutex<VecDeque<HttpResponse>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Scripted {
    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        });
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for Scripted {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.seen.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::Transport("no scripted response left".to_string()))
    }
}

pub(crate) fn session(transport: Scripted) -> Arc<Session<Scripted>> {
    let config = ClientConfig::new("test-key").with_base_url("http://api.test");
    Arc::new(Session::with_transport(config, transport))
}
