// Fakes shared by unit tests across modules
use crate::inference::traits::{CompletionRequest, InferenceBackend};
use crate::model::{ClassificationResult, InferenceError, Record, TagCode};
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String, InferenceError> + Send + Sync>;

/// Scripted backend that counts calls and remembers every request.
pub struct FakeBackend {
    responder: Responder,
    models: Option<Vec<String>>,
    jitter_ms: u64,
    shuffle_ids: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeBackend {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, InferenceError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            models: Some(vec!["llama3.2:1b".to_string()]),
            jitter_ms: 0,
            shuffle_ids: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers calls with the given replies in order, then fails.
    pub fn sequence(replies: Vec<Result<String, InferenceError>>) -> Self {
        let queue = Mutex::new(VecDeque::from(replies));
        Self::new(move |_: &CompletionRequest| {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(InferenceError::Transport("script exhausted".into())))
        })
    }

    /// `None` makes `list_models` fail as if the server were down.
    pub fn with_models(mut self, models: Option<Vec<String>>) -> Self {
        self.models = models;
        self
    }

    /// Sleeps up to `max_ms` before each answer.
    pub fn with_jitter(mut self, max_ms: u64) -> Self {
        self.jitter_ms = max_ms;
        self
    }

    /// Returns array answers in random order; callers must echo ids.
    pub fn with_shuffled_ids(mut self, enabled: bool) -> Self {
        self.shuffle_ids = enabled;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl InferenceBackend for FakeBackend {
    async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
        self.models
            .clone()
            .ok_or_else(|| InferenceError::Transport("connection refused".into()))
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if self.jitter_ms > 0 {
            let delay = rand::rng().random_range(0..=self.jitter_ms);
            sleep(Duration::from_millis(delay)).await;
        }
        let answer = (self.responder)(request)?;
        Ok(if self.shuffle_ids { shuffled(answer) } else { answer })
    }
}

fn shuffled(answer: String) -> String {
    match serde_json::from_str::<Vec<Value>>(&answer) {
        Ok(mut items) => {
            items.shuffle(&mut rand::rng());
            Value::Array(items).to_string()
        }
        Err(_) => answer,
    }
}

/// Product names listed in a prompt, in prompt order.
pub fn product_names(user_message: &str) -> Vec<String> {
    user_message
        .lines()
        .filter_map(|line| {
            let (number, rest) = line.split_once(". Name: ")?;
            number.trim().parse::<usize>().ok()?;
            Some(rest.split(" | ").next().unwrap_or(rest).to_string())
        })
        .collect()
}

/// Verdict the numbered responder gives for `Zorblax {n}`.
pub fn expected_verdict(n: usize) -> ClassificationResult {
    if n % 3 == 0 {
        ClassificationResult::ingredient([TagCode::Spice])
    } else {
        ClassificationResult::non_ingredient()
    }
}

/// Well-formed answer with echoed ids, derived from the trailing number of
/// each product name.
pub fn numbered_verdicts(request: &CompletionRequest) -> Result<String, InferenceError> {
    let verdicts: Vec<Value> = product_names(&request.user)
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n: usize = name
                .rsplit(' ')
                .next()
                .and_then(|tail| tail.parse().ok())
                .unwrap_or(1);
            let verdict = expected_verdict(n);
            json!({
                "id": i + 1,
                "ingredient": verdict.is_ingredient,
                "tags": verdict.tags,
            })
        })
        .collect();
    Ok(Value::Array(verdicts).to_string())
}

/// Records the rule engine cannot decide, named `Zorblax 0..n`.
pub fn unresolved_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record::new(format!("Zorblax {}", i), "Gifts"))
        .collect()
}
