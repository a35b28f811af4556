/// Overall UI state outside the navigation controller.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,
    /// Active section as last reported to the log.
    pub last_active: Option<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Log a section change. Returns true when `active` differs from the
    /// previously reported section.
    pub fn note_active_section(&mut self, active: &str) -> bool {
        if self.last_active.as_deref() == Some(active) {
            return false;
        }
        self.add_log(format!("Viewing: {active}"));
        self.last_active = Some(active.to_string());
        true
    }
}
