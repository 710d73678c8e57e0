//! 联系表单的提交流程
//!
//! `idle -> submitting -> success -> submitted -> idle`，失败时由`submitting`直接回到`idle`。
//! 成功后的两段等待由一个定时任务推进，任务句柄由表单实例持有，实例销毁时一并取消。

mod registry;

pub use registry::ContactForms;

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use tokio::{sync::broadcast, task::AbortHandle};
use tracing::Instrument;

use crate::{
    config::ContactFormConfig,
    contact_client::{ContactClient, ContactClientError},
    domain::{Field, SubmissionRequest, SubmissionState},
    util::error_chain_fmt,
};

const EVENT_CAPACITY: usize = 16;

/// 成功后的两段停留时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub success_hold: Duration,
    pub confirmation_hold: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            success_hold: Duration::from_secs(1),
            confirmation_hold: Duration::from_secs(3),
        }
    }
}

impl Schedule {
    pub fn from_config(config: &ContactFormConfig) -> Self {
        Self {
            success_hold: Duration::from_millis(config.success_hold_milliseconds),
            confirmation_hold: Duration::from_millis(config.confirmation_hold_milliseconds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    StateChanged(SubmissionState),
    /// 每次失败的提交只发出一次
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// 表单不在`idle`阶段，没有发出请求
    Ignored,
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Failed to send message. Please try again.")]
    Failed(#[from] ContactClientError),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

struct FormInner {
    request: SubmissionRequest,
    state: SubmissionState,
    last_active: Instant,
}

pub struct ContactForm {
    inner: Arc<Mutex<FormInner>>,
    events: broadcast::Sender<FormEvent>,
    client: Arc<ContactClient>,
    schedule: Schedule,
    pending: Mutex<Option<AbortHandle>>,
}

impl ContactForm {
    pub fn new(client: Arc<ContactClient>, schedule: Schedule) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let inner = FormInner {
            request: SubmissionRequest::default(),
            state: SubmissionState::Idle,
            last_active: Instant::now(),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
            events,
            client,
            schedule,
            pending: Mutex::new(None),
        }
    }

    pub fn state(&self) -> SubmissionState {
        lock(&self.inner).state
    }

    pub fn request(&self) -> SubmissionRequest {
        lock(&self.inner).request.clone()
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    /// 处于`idle`且超过`ttl`没有任何操作
    pub fn is_idle_for(&self, ttl: Duration) -> bool {
        let inner = lock(&self.inner);
        inner.state.is_idle() && inner.last_active.elapsed() >= ttl
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let mut inner = lock(&self.inner);
        inner.request.update_field(field, value);
        inner.last_active = Instant::now();
    }

    #[tracing::instrument(name = "submitting contact form", skip(self))]
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmissionError> {
        let frozen = {
            let mut inner = lock(&self.inner);
            if !inner.state.is_idle() {
                tracing::info!(state = inner.state.as_str(), "form is busy, submission ignored.");
                return Ok(SubmitOutcome::Ignored);
            }
            inner.last_active = Instant::now();
            transition(&mut inner, &self.events, SubmissionState::Submitting);
            inner.request.clone()
        };

        // 若本次提交在等待响应时被取消，表单回到`idle`
        let mut in_flight = InFlight {
            form: self,
            settled: false,
        };
        let result = self.client.send(&frozen).await;
        in_flight.settled = true;

        match result {
            Ok(()) => {
                transition(
                    &mut lock(&self.inner),
                    &self.events,
                    SubmissionState::Success,
                );
                self.schedule_confirmation();
                Ok(SubmitOutcome::Accepted)
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "contact message was not delivered."
                );
                let error = SubmissionError::from(e);
                let mut inner = lock(&self.inner);
                transition(&mut inner, &self.events, SubmissionState::Idle);
                let _ = self.events.send(FormEvent::Failed(error.to_string()));
                Err(error)
            }
        }
    }

    /// 取消尚未完成的定时转换，表单停留在当前阶段
    pub fn teardown(&self) {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }

    fn schedule_confirmation(&self) {
        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        let Schedule {
            success_hold,
            confirmation_hold,
        } = self.schedule;

        let task = tokio::spawn(
            async move {
                tokio::time::sleep(success_hold).await;
                transition(&mut lock(&inner), &events, SubmissionState::Submitted);

                tokio::time::sleep(confirmation_hold).await;
                let mut guard = lock(&inner);
                guard.request.clear();
                guard.last_active = Instant::now();
                transition(&mut guard, &events, SubmissionState::Idle);
            }
            .instrument(tracing::info_span!("contact form confirmation")),
        );

        if let Some(previous) = lock(&self.pending).replace(task.abort_handle()) {
            previous.abort();
        }
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.teardown();
    }
}

struct InFlight<'a> {
    form: &'a ContactForm,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("contact submission abandoned before a response arrived.");
            transition(
                &mut lock(&self.form.inner),
                &self.form.events,
                SubmissionState::Idle,
            );
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn transition(
    inner: &mut FormInner,
    events: &broadcast::Sender<FormEvent>,
    state: SubmissionState,
) {
    tracing::debug!(from = inner.state.as_str(), to = state.as_str(), "form transition.");
    inner.state = state;
    // 没有订阅者时发送失败，忽略即可
    let _ = events.send(FormEvent::StateChanged(state));
}
