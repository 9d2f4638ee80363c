//! Test-only helpers: a recording action runner and log capture.

use std::cell::RefCell;
use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use crate::core::action::Action;
use crate::io::dispatch::ActionRunner;

type FailWhen = Box<dyn Fn(&Action) -> bool>;

/// Records every action it is asked to perform instead of performing it.
///
/// Actions matching the failure predicate return an error and are not
/// recorded.
#[derive(Default)]
pub struct RecordingRunner {
    performed: RefCell<Vec<Action>>,
    fail_when: Option<FailWhen>,
}

impl RecordingRunner {
    /// Runner that fails on any action matching `predicate`.
    pub fn failing_on(predicate: impl Fn(&Action) -> bool + 'static) -> Self {
        Self {
            performed: RefCell::new(Vec::new()),
            fail_when: Some(Box::new(predicate)),
        }
    }

    /// Actions performed so far, in order.
    pub fn performed(&self) -> Vec<Action> {
        self.performed.borrow().clone()
    }

    /// Descriptions of performed actions, in order.
    pub fn descriptions(&self) -> Vec<String> {
        self.performed.borrow().iter().map(Action::describe).collect()
    }
}

impl ActionRunner for RecordingRunner {
    fn perform(&self, action: &Action) -> Result<()> {
        if let Some(fail_when) = &self.fail_when
            && fail_when(action)
        {
            return Err(anyhow!("scripted failure"));
        }
        self.performed.borrow_mut().push(action.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged
/// at `INFO` and above, without ANSI colors.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> String {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().map(|b| b.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
