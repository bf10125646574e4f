use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

use crate::constants::fallback;
use crate::context::{ConversationStore, Prompt, PromptBuilder, Turn};
use crate::llm::ModelClient;

/// Tickets are unique across every session in the process.
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// Why a submission was dropped. Neither case changes session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Rejected(RejectReason),
    /// The model turn appended for this submission.
    Completed(Turn),
}

/// Observable state changes, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    TurnAppended(Turn),
    BusyChanged(bool),
}

/// Token for an accepted submission awaiting its model turn.
///
/// Only the session that issued it will resolve it.
#[derive(Debug)]
pub struct PendingTurn {
    ticket: u64,
    prompt: Prompt,
}

impl PendingTurn {
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }
}

struct SessionInner {
    store: ConversationStore,
    state: SessionState,
    /// Ticket of the outstanding submission, if any.
    ticket: Option<u64>,
}

/// Drives one chat session: one store, at most one model call in flight.
///
/// The store lock is never held across the model call, so readers can
/// observe the optimistic user turn and the busy flag while it runs.
pub struct SessionController {
    client: ModelClient,
    prompt_builder: PromptBuilder,
    inner: Mutex<SessionInner>,
    events: Option<UnboundedSender<SessionEvent>>,
}

/// Keeps a `submit` call paired: if its future is dropped mid-call, the
/// session still gets a model turn and returns to idle.
struct InFlight<'a> {
    session: &'a SessionController,
    done: bool,
}

impl InFlight<'_> {
    fn complete(mut self, text: String) -> Turn {
        self.done = true;
        let mut inner = self.session.lock();
        self.session.append_reply(&mut inner, text)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        tracing::warn!("model call abandoned before it finished");
        let mut inner = self.session.lock();
        self.session
            .append_reply(&mut inner, fallback::ABANDONED.to_string());
    }
}

impl SessionController {
    pub fn new(client: ModelClient, greeting: impl Into<String>) -> Self {
        Self {
            client,
            prompt_builder: PromptBuilder::default(),
            inner: Mutex::new(SessionInner {
                store: ConversationStore::new(greeting),
                state: SessionState::Idle,
                ticket: None,
            }),
            events: None,
        }
    }

    pub fn with_prompt_builder(mut self, builder: PromptBuilder) -> Self {
        self.prompt_builder = builder;
        self
    }

    pub fn with_events(mut self, tx: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Run one full turn: accept the text, call the model once, append its reply.
    ///
    /// Dropping the returned future before it finishes appends the
    /// abandoned-call fallback instead of leaving the session busy.
    pub async fn submit(&self, text: impl Into<String>) -> Submission {
        let PendingTurn { prompt, .. } = match self.begin(text).await {
            Ok(pending) => pending,
            Err(reason) => return Submission::Rejected(reason),
        };

        let guard = InFlight {
            session: self,
            done: false,
        };
        let outcome = self.client.generate_prompt(prompt).await;
        Submission::Completed(guard.complete(outcome.into_text()))
    }

    /// Accept a submission: append the user turn and mark the session busy.
    ///
    /// Empty or whitespace-only text, or any submission while a call is
    /// outstanding, is dropped without touching the store. The returned
    /// token must be passed back to [`resolve`](Self::resolve) on this session.
    pub async fn begin(&self, text: impl Into<String>) -> Result<PendingTurn, RejectReason> {
        let text = text.into();
        if text.trim().is_empty() {
            tracing::warn!("submission dropped: empty text");
            return Err(RejectReason::Empty);
        }

        let mut inner = self.lock();
        if inner.state == SessionState::AwaitingResponse {
            tracing::warn!("submission dropped: a model call is already in flight");
            return Err(RejectReason::Busy);
        }

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        let turn = Turn::user(text);
        inner.store.append(turn.clone());
        inner.state = SessionState::AwaitingResponse;
        inner.ticket = Some(ticket);
        self.emit(SessionEvent::TurnAppended(turn));
        self.emit(SessionEvent::BusyChanged(true));

        let prompt = self.prompt_builder.build_from_store(&inner.store);
        tracing::debug!(
            ticket,
            turns = inner.store.len(),
            prompt_len = prompt.text.len(),
            "submission accepted"
        );

        Ok(PendingTurn { ticket, prompt })
    }

    /// Fold the model's text back in and return to idle.
    ///
    /// A token this session did not issue is handed back untouched.
    pub async fn resolve(
        &self,
        pending: PendingTurn,
        text: impl Into<String>,
    ) -> Result<Turn, PendingTurn> {
        let mut inner = self.lock();
        if inner.ticket != Some(pending.ticket) {
            tracing::warn!(ticket = pending.ticket, "refusing to resolve a foreign token");
            return Err(pending);
        }
        Ok(self.append_reply(&mut inner, text.into()))
    }

    pub async fn turns(&self) -> Vec<Turn> {
        self.lock().store.all().to_vec()
    }

    pub async fn turn_count(&self) -> usize {
        self.lock().store.len()
    }

    pub async fn state(&self) -> SessionState {
        self.lock().state
    }

    pub async fn is_busy(&self) -> bool {
        self.state().await == SessionState::AwaitingResponse
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn append_reply(&self, inner: &mut SessionInner, mut text: String) -> Turn {
        if text.is_empty() {
            text = fallback::EMPTY.to_string();
        }

        let turn = Turn::model(text);
        inner.store.append(turn.clone());
        inner.state = SessionState::Idle;
        inner.ticket = None;
        self.emit(SessionEvent::TurnAppended(turn.clone()));
        self.emit(SessionEvent::BusyChanged(false));

        turn
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(ref tx) = self.events {
            let _ = tx.send(event);
        }
    }
}
