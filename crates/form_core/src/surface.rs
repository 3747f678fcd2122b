use anyhow::Result;

/// Raw field contents exactly as the user left them; parsing and
/// validation happen in the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub original_url: String,
    pub custom_alias: String,
    pub expires_in: String,
}

/// Handle to the visible form. The controller reads and writes widget
/// state through this seam only; it never owns widget creation, so the
/// state machine can run headlessly against a fake surface.
pub trait FormSurface: Send + Sync {
    fn read_input(&self) -> FormInput;
    /// Restores every input field to its empty default.
    fn clear_input(&self);

    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    fn set_submit_enabled(&self, enabled: bool);

    fn set_input_panel_visible(&self, visible: bool);
    fn set_result_panel_visible(&self, visible: bool);

    fn set_short_url(&self, short_url: &str);
    fn short_url(&self) -> String;
    fn set_expiry_notice(&self, notice: &str);

    fn copy_label(&self) -> String;
    /// Sets the copy control's label and toggles its success styling.
    fn set_copy_feedback(&self, label: &str, highlighted: bool);
    /// Legacy selection-based copy; only used when the asynchronous
    /// clipboard is unavailable.
    fn copy_selection(&self) -> Result<()>;

    /// Blocking user-facing report. The submit control is always
    /// restored before this fires.
    fn alert(&self, message: &str);

    /// Top offset of an in-page anchor target, if it exists.
    fn anchor_top(&self, target: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, offset: f64);
}
