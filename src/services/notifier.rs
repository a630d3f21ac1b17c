//! Transient user notifications
//!
//! Messages are translated when raised and expire after a fixed duration.

use super::i18n::Translator;
use chrono::{DateTime, Duration, Local};
use std::collections::VecDeque;

/// Maximum number of alerts kept on screen
const MAX_ALERTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Error,
}

/// A translated message shown at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub created_at: DateTime<Local>,
}

impl Alert {
    pub fn formatted_time(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// Queue of alerts raised by the screen
#[derive(Debug, Clone)]
pub struct Notifier {
    translator: Translator,
    lifetime: Duration,
    alerts: VecDeque<Alert>,
}

impl Notifier {
    pub fn new(translator: Translator, lifetime: Duration) -> Self {
        Self {
            translator,
            lifetime,
            alerts: VecDeque::new(),
        }
    }

    /// Raise an informational alert
    pub fn info(&mut self, key: &str, params: &[(&str, &str)]) {
        let message = self.translator.t_with(key, params);
        tracing::info!(key, %message, "Alert");
        self.push(AlertLevel::Info, message);
    }

    /// Raise an error alert
    pub fn error(&mut self, key: &str, params: &[(&str, &str)]) {
        let message = self.translator.t_with(key, params);
        tracing::error!(key, %message, "Alert");
        self.push(AlertLevel::Error, message);
    }

    fn push(&mut self, level: AlertLevel, message: String) {
        self.alerts.push_back(Alert {
            level,
            message,
            created_at: Local::now(),
        });
        while self.alerts.len() > MAX_ALERTS {
            self.alerts.pop_front();
        }
    }

    /// Drop alerts older than the configured lifetime
    pub fn expire(&mut self, now: DateTime<Local>) {
        let lifetime = self.lifetime;
        self.alerts.retain(|alert| now - alert.created_at < lifetime);
    }

    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
