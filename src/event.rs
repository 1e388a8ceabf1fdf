//! Widget events fed into the dispatch layer.

use std::time::Instant;

/// Something the surrounding shell asked the widget to do.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Chat toggle control clicked.
    OpenRequested,
    /// Close control clicked.
    CloseRequested,
    /// Click landed outside the panel; closes it.
    BackdropClicked,
    /// Submit control clicked or Enter pressed with this input text.
    SubmitRequested(String),
    /// Viewport width changed, in logical pixels.
    ViewportResized { width: u32 },
    /// Time advanced; fire any due replies.
    Tick(Instant),
}

/// Queue of events waiting for dispatch.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<WidgetEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: WidgetEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
