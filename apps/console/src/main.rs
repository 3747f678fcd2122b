use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clap::Parser;
use form_core::{
    Clipboard, FormController, FormInput, FormSurface, HttpShortenApi, UiState,
    COPY_FEEDBACK_REVERT_AFTER,
};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the shortener API, e.g. http://localhost:8080
    #[arg(long)]
    api_url: String,
    /// Long URL to shorten
    #[arg(long)]
    url: String,
    /// Optional custom alias (3-10 characters)
    #[arg(long, default_value = "")]
    alias: String,
    /// Expiry in seconds; 0 means the link never expires
    #[arg(long, default_value_t = 0)]
    expires_in: i64,
    /// Copy the shortened URL to the system clipboard
    #[arg(long)]
    copy: bool,
}

struct ConsoleState {
    input: FormInput,
    submit_label: String,
    short_url: String,
    copy_label: String,
}

/// Terminal rendition of the form surface: widget writes become
/// stdout lines, alerts go to stderr.
struct ConsoleSurface {
    state: Mutex<ConsoleState>,
}

impl ConsoleSurface {
    fn new(input: FormInput) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ConsoleState {
                input,
                submit_label: "Shorten URL".to_string(),
                short_url: String::new(),
                copy_label: "Copy".to_string(),
            }),
        })
    }
}

impl FormSurface for ConsoleSurface {
    fn read_input(&self) -> FormInput {
        self.state.lock().expect("console state").input.clone()
    }

    fn clear_input(&self) {
        self.state.lock().expect("console state").input = FormInput::default();
    }

    fn submit_label(&self) -> String {
        self.state
            .lock()
            .expect("console state")
            .submit_label
            .clone()
    }

    fn set_submit_label(&self, label: &str) {
        let mut state = self.state.lock().expect("console state");
        state.submit_label = label.to_string();
        println!("[{label}]");
    }

    fn set_submit_enabled(&self, _enabled: bool) {}

    fn set_input_panel_visible(&self, _visible: bool) {}

    fn set_result_panel_visible(&self, visible: bool) {
        if visible {
            println!("--- result ---");
        }
    }

    fn set_short_url(&self, short_url: &str) {
        self.state.lock().expect("console state").short_url = short_url.to_string();
        println!("Short URL: {short_url}");
    }

    fn short_url(&self) -> String {
        self.state.lock().expect("console state").short_url.clone()
    }

    fn set_expiry_notice(&self, notice: &str) {
        println!("{notice}");
    }

    fn copy_label(&self) -> String {
        self.state.lock().expect("console state").copy_label.clone()
    }

    fn set_copy_feedback(&self, label: &str, _highlighted: bool) {
        self.state.lock().expect("console state").copy_label = label.to_string();
        println!("[{label}]");
    }

    fn copy_selection(&self) -> Result<()> {
        Err(anyhow!("selection copy is not available in a terminal"))
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn anchor_top(&self, _target: &str) -> Option<f64> {
        None
    }

    fn smooth_scroll_to(&self, _offset: f64) {}
}

struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let api = Arc::new(HttpShortenApi::new(&args.api_url)?);
    let surface = ConsoleSurface::new(FormInput {
        original_url: args.url,
        custom_alias: args.alias,
        expires_in: args.expires_in.to_string(),
    });
    let controller = FormController::new(api, surface, Arc::new(SystemClipboard));

    controller.submit().await;

    if args.copy && controller.ui_state().await == UiState::Success {
        controller.copy_short_url().await;
        // Let the feedback revert print before the process exits.
        tokio::time::sleep(COPY_FEEDBACK_REVERT_AFTER).await;
    }

    Ok(())
}
