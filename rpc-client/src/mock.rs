//! Scripted transport for exercising higher layers without a server
//!
//! Enabled via the `test-support` feature. Responses are queued per method;
//! a call with no queued response returns `Ok(Value::Null)`, which matches
//! the "no data" success shape of mutation methods.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::{RpcError, Transport};

/// A recording transport that replays scripted results
///
/// Clones share the same state, so a mock handed to a client can still be
/// inspected by the test that created it.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, VecDeque<Result<Value, RpcError>>>,
    calls: Vec<(String, Option<Value>)>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful result for the next call to `method`
    pub fn push_result(&self, method: &str, result: Value) {
        self.lock()
            .responses
            .entry(method.to_string())
            .or_default()
            .push_back(Ok(result));
    }

    /// Queue a failure for the next call to `method`
    pub fn push_error(&self, method: &str, error: RpcError) {
        self.lock()
            .responses
            .entry(method.to_string())
            .or_default()
            .push_back(Err(error));
    }

    /// Every `(method, params)` pair seen so far, in call order
    pub fn calls(&self) -> Vec<(String, Option<Value>)> {
        self.lock().calls.clone()
    }

    /// Params of every call to `method`, in call order
    pub fn calls_for(&self, method: &str) -> Vec<Option<Value>> {
        self.lock()
            .calls
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, params)| params.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock transport state poisoned")
    }
}

impl Transport for MockTransport {
    fn call(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let mut state = self.lock();
        state.calls.push((method.to_string(), params));
        state
            .responses
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Ok(Value::Null))
    }
}
