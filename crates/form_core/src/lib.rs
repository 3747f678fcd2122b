use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use shared::protocol::{ShortenRequest, ShortenResponse, ALIAS_MAX_LEN, ALIAS_MIN_LEN, EXPIRES_NEVER};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub mod api;
pub mod clipboard;
pub mod error;
pub mod surface;

pub use api::{HttpShortenApi, ShortenApi, DEFAULT_REQUEST_TIMEOUT};
pub use clipboard::{Clipboard, UnavailableClipboard};
pub use error::ShortenError;
pub use surface::{FormInput, FormSurface};

/// Submit label shown while a request is in flight.
const SUBMIT_BUSY_LABEL: &str = "Processing...";
/// Copy control label shown right after a successful copy.
const COPY_FEEDBACK_LABEL: &str = "Copied!";
/// How long copy feedback stays visible before reverting.
pub const COPY_FEEDBACK_REVERT_AFTER: Duration = Duration::from_secs(2);
/// Fixed page-header height subtracted from anchor scroll targets.
pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;

const EXPIRY_NEVER_NOTICE: &str = "This link does not expire.";
const ALERT_PREFIX: &str = "Failed to shorten URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Submitting,
    Success,
    Error,
}

struct ControllerState {
    ui_state: UiState,
    /// Explicit single-flight invariant; the disabled submit control
    /// mirrors it but is not the guard.
    submit_in_flight: bool,
}

/// Owns the submit -> result -> reset cycle for one shorten form.
/// Every external collaborator is injected: the API, the UI surface,
/// and the clipboard.
pub struct FormController {
    api: Arc<dyn ShortenApi>,
    surface: Arc<dyn FormSurface>,
    clipboard: Arc<dyn Clipboard>,
    inner: Mutex<ControllerState>,
}

impl FormController {
    pub fn new(
        api: Arc<dyn ShortenApi>,
        surface: Arc<dyn FormSurface>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Arc<Self> {
        Arc::new(Self {
            api,
            surface,
            clipboard,
            inner: Mutex::new(ControllerState {
                ui_state: UiState::Idle,
                submit_in_flight: false,
            }),
        })
    }

    pub async fn ui_state(&self) -> UiState {
        self.inner.lock().await.ui_state
    }

    /// Runs one full submit cycle. At most one request is outstanding
    /// per controller; a submit during flight is dropped.
    pub async fn submit(&self) {
        {
            let mut inner = self.inner.lock().await;
            if inner.submit_in_flight {
                debug!("submit dropped: a request is already in flight");
                return;
            }
            inner.submit_in_flight = true;
        }

        let input = self.surface.read_input();
        let request = match build_request(&input) {
            Ok(request) => request,
            Err(err) => {
                // Rejected before any I/O; the form stays idle with
                // the user's input intact.
                self.surface.alert(&err.to_string());
                let mut inner = self.inner.lock().await;
                inner.submit_in_flight = false;
                inner.ui_state = UiState::Idle;
                return;
            }
        };

        self.inner.lock().await.ui_state = UiState::Submitting;
        debug!(original_url = %request.original_url, "submitting shorten request");

        let idle_label = self.surface.submit_label();
        self.surface.set_submit_label(SUBMIT_BUSY_LABEL);
        self.surface.set_submit_enabled(false);

        let outcome = self.api.shorten(&request).await;

        // Restored on every exit path, before any result is rendered,
        // so the user is never left with a dead control.
        self.surface.set_submit_label(&idle_label);
        self.surface.set_submit_enabled(true);

        match outcome {
            Ok(response) => {
                self.render_success(&response);
                let mut inner = self.inner.lock().await;
                inner.ui_state = UiState::Success;
                inner.submit_in_flight = false;
            }
            Err(err) => {
                warn!(error = %err, "shorten request failed");
                self.inner.lock().await.ui_state = UiState::Error;
                self.surface.alert(&format!("{ALERT_PREFIX}: {err}"));
                // Reported, not sticky: the input panel is still
                // active so the user can correct and resubmit.
                let mut inner = self.inner.lock().await;
                inner.ui_state = UiState::Idle;
                inner.submit_in_flight = false;
            }
        }
    }

    fn render_success(&self, response: &ShortenResponse) {
        self.surface.set_short_url(&response.short_url);
        self.surface
            .set_expiry_notice(&expiry_notice(response.expires_at));
        self.surface.set_input_panel_visible(false);
        self.surface.set_result_panel_visible(true);
    }

    /// Copies the rendered short URL, preferring the asynchronous
    /// clipboard and falling back to selection-based copy. Feedback
    /// reverts on a timer, not on user interaction.
    pub async fn copy_short_url(self: &Arc<Self>) {
        let short_url = self.surface.short_url();

        let copied = match self.clipboard.write_text(&short_url) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "async clipboard unavailable, trying selection copy");
                match self.surface.copy_selection() {
                    Ok(()) => true,
                    Err(err) => {
                        warn!(error = %err, "copy to clipboard failed");
                        false
                    }
                }
            }
        };
        if !copied {
            return;
        }

        let idle_label = self.surface.copy_label();
        self.surface.set_copy_feedback(COPY_FEEDBACK_LABEL, true);

        let controller = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK_REVERT_AFTER).await;
            controller.surface.set_copy_feedback(&idle_label, false);
        });
    }

    /// "Create new" action: full reset back to the empty input form.
    pub async fn create_new(&self) {
        self.surface.set_result_panel_visible(false);
        self.surface.set_input_panel_visible(true);
        self.surface.clear_input();
        self.inner.lock().await.ui_state = UiState::Idle;
        debug!("form reset to idle");
    }

    /// Cosmetic in-page navigation; independent of the state machine
    /// and without error conditions.
    pub fn follow_anchor(&self, target: &str) {
        if let Some(top) = self.surface.anchor_top(target) {
            self.surface.smooth_scroll_to(top - ANCHOR_HEADER_OFFSET);
        }
    }
}

fn build_request(input: &FormInput) -> Result<ShortenRequest, ShortenError> {
    if input.original_url.is_empty() {
        return Err(ShortenError::Validation(
            "Original URL is required".to_string(),
        ));
    }

    // Blank means "no preference": the field is omitted from the wire
    // entirely so the server takes its alias-generation path.
    let custom_alias = if input.custom_alias.is_empty() {
        None
    } else {
        let len = input.custom_alias.chars().count();
        if !(ALIAS_MIN_LEN..=ALIAS_MAX_LEN).contains(&len) {
            return Err(ShortenError::invalid_alias_length());
        }
        Some(input.custom_alias.clone())
    };

    // Range checks are the server's job; unparsable input maps to the
    // designated never-expires value.
    let expires_in = input
        .expires_in
        .trim()
        .parse::<i64>()
        .unwrap_or(EXPIRES_NEVER);

    Ok(ShortenRequest {
        original_url: input.original_url.clone(),
        expires_in,
        custom_alias,
    })
}

fn expiry_notice(expires_at: Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(at) => {
            let local = at.with_timezone(&Local);
            format!(
                "This link will expire on {} at {}.",
                local.format("%x"),
                local.format("%X")
            )
        }
        None => EXPIRY_NEVER_NOTICE.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
