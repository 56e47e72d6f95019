//! Blocking user prompts.

use std::sync::{Mutex, PoisonError};

/// Modal confirm and alert prompts offered to views.
pub trait Dialogs: Send + Sync {
    /// Ask a yes/no question; `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;

    /// Tell the user something went wrong.
    fn alert(&self, message: &str);
}

/// Dialogs with a fixed answer that collect alerts for later display.
#[derive(Debug)]
pub struct ScriptedDialogs {
    answer: bool,
    alerts: Mutex<Vec<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    /// Dialogs that answer every confirmation with `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            alerts: Mutex::new(Vec::new()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Confirmation questions asked so far.
    pub fn questions(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
