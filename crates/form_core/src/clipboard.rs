use anyhow::{anyhow, Result};

/// Asynchronous clipboard-write capability. The system-backed
/// implementation lives in the application layer; the controller only
/// needs the seam.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Stands in where no system clipboard exists, forcing the
/// selection-based fallback path on the surface.
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(anyhow!("system clipboard is unavailable"))
    }
}
