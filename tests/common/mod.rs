//! Shared test helpers.

// Each test binary compiles this module separately; not every binary uses
// every helper.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chat_widget_sim::error::{Error, Result};
use chat_widget_sim::message::Author;
use chat_widget_sim::reply::ResponseSource;
use chat_widget_sim::view::ChatView;

/// One recorded view operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    SetOpen(bool),
    FocusInput,
    ClearInput,
    Entry {
        author: Author,
        text: String,
        time_label: String,
    },
    ScrollToLatest,
    Notice(String),
    SetCompact(bool),
}

/// View that records every call; can be flipped to "unavailable" to simulate
/// a missing display surface.
pub struct RecordingView {
    calls: Rc<RefCell<Vec<ViewCall>>>,
    available: Rc<Cell<bool>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            available: Rc::new(Cell::new(true)),
        }
    }

    /// Shared handle to the call log; keep a clone before moving the view
    /// into a widget.
    pub fn log(&self) -> Rc<RefCell<Vec<ViewCall>>> {
        Rc::clone(&self.calls)
    }

    /// Shared availability flag; set false to make every call fail.
    pub fn availability(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.available)
    }

    fn record(&self, call: ViewCall) -> Result<()> {
        if !self.available.get() {
            return Err(Error::ViewUnavailable("view detached".into()));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl ChatView for RecordingView {
    fn set_open(&mut self, open: bool) -> Result<()> {
        self.record(ViewCall::SetOpen(open))
    }

    fn focus_input(&mut self) -> Result<()> {
        self.record(ViewCall::FocusInput)
    }

    fn clear_input(&mut self) -> Result<()> {
        self.record(ViewCall::ClearInput)
    }

    fn append_entry(&mut self, author: Author, text: &str, time_label: &str) -> Result<()> {
        self.record(ViewCall::Entry {
            author,
            text: text.to_string(),
            time_label: time_label.to_string(),
        })
    }

    fn scroll_to_latest(&mut self) -> Result<()> {
        self.record(ViewCall::ScrollToLatest)
    }

    fn show_notice(&mut self, notice: &str) -> Result<()> {
        self.record(ViewCall::Notice(notice.to_string()))
    }

    fn set_compact(&mut self, compact: bool) -> Result<()> {
        self.record(ViewCall::SetCompact(compact))
    }
}

/// Deterministic response source: cycles through fixed replies with a fixed
/// delay.
pub struct ScriptedResponses {
    replies: Vec<String>,
    next: usize,
    delay: Duration,
}

impl ScriptedResponses {
    pub fn new(replies: &[&str], delay: Duration) -> Self {
        Self {
            replies: replies.iter().map(|s| s.to_string()).collect(),
            next: 0,
            delay,
        }
    }

    /// Single canned reply after `delay`.
    pub fn single(reply: &str, delay: Duration) -> Self {
        Self::new(&[reply], delay)
    }
}

impl ResponseSource for ScriptedResponses {
    fn next_reply(&mut self) -> String {
        let reply = self.replies[self.next % self.replies.len()].clone();
        self.next += 1;
        reply
    }

    fn next_delay(&mut self) -> Duration {
        self.delay
    }
}
