//! The chat widget controller.

use std::time::Instant;

use crate::error::{Error, Result};
use crate::event::WidgetEvent;
use crate::message::{Author, Message, Transcript};
use crate::reply::ResponseSource;
use crate::schedule::ReplyQueue;
use crate::view::ChatView;

/// Viewport widths below this get the narrow layout.
pub const COMPACT_BREAKPOINT: u32 = 768;

/// Notice shown when submit is called with nothing to send.
pub const EMPTY_MESSAGE_NOTICE: &str = "Please enter a message before sending.";

/// Owns the open/closed state of the chat panel, the transcript, and the
/// queue of simulated admin replies.
///
/// Operations return `Result` so callers can react; [`ChatWidget::dispatch`]
/// is the one place errors are logged and swallowed.
pub struct ChatWidget<V: ChatView, R: ResponseSource> {
    view: V,
    responses: R,
    transcript: Transcript,
    open: bool,
    auto_focus: bool,
    replies: ReplyQueue,
}

impl<V: ChatView, R: ResponseSource> ChatWidget<V, R> {
    pub fn new(view: V, responses: R) -> Self {
        Self {
            view,
            responses,
            transcript: Transcript::new(),
            open: false,
            auto_focus: true,
            replies: ReplyQueue::new(),
        }
    }

    /// Disable moving focus to the input field on open.
    pub fn without_auto_focus(mut self) -> Self {
        self.auto_focus = false;
        self
    }

    /// Show the panel and focus the input field. Idempotent.
    pub fn open(&mut self) -> Result<()> {
        self.open = true;
        self.view.set_open(true)?;
        if self.auto_focus {
            self.view.focus_input()?;
        }
        Ok(())
    }

    /// Hide the panel. Idempotent. Pending replies keep their deadlines and
    /// still arrive after closing.
    pub fn close(&mut self) -> Result<()> {
        self.open = false;
        self.view.set_open(false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Send a user message and schedule the simulated admin reply.
    ///
    /// Whitespace-only input raises a validation notice and changes nothing.
    /// Exactly one reply is scheduled per successful submit, even across
    /// rapid repeated calls.
    pub fn submit(&mut self, raw: &str) -> Result<()> {
        let text = raw.trim();
        if text.is_empty() {
            self.view.show_notice(EMPTY_MESSAGE_NOTICE)?;
            return Err(Error::EmptyMessage);
        }

        let message = Message::user(text);
        self.render(&message)?;
        self.transcript.push(message);
        self.view.clear_input()?;

        let delay = self.responses.next_delay();
        let reply = self.responses.next_reply();
        self.replies.schedule(Instant::now() + delay, reply);
        tracing::debug!(text, delay_ms = delay.as_millis() as u64, "message sent");
        Ok(())
    }

    /// Fire every reply due at `now`, in fire-time order. Returns the number
    /// of admin messages appended.
    pub fn tick(&mut self, now: Instant) -> Result<usize> {
        let due = self.replies.take_due(now);
        let fired = due.len();
        for pending in due {
            let message = Message::admin(pending.text);
            self.render(&message)?;
            self.transcript.push(message);
        }
        Ok(fired)
    }

    /// Apply the responsive breakpoint. Presentation only: never touches the
    /// open flag or the transcript.
    pub fn resize(&mut self, width: u32) -> Result<()> {
        self.view.set_compact(width < COMPACT_BREAKPOINT)
    }

    /// Append one entry to the transcript view and scroll it into sight.
    fn render(&mut self, message: &Message) -> Result<()> {
        self.view
            .append_entry(message.author(), message.text(), &message.time_label())?;
        self.view.scroll_to_latest()
    }

    /// Route an event to its operation, logging any failure. This is the
    /// single catch-and-log boundary; nothing propagates past it.
    pub fn dispatch(&mut self, event: WidgetEvent) {
        let result = match &event {
            WidgetEvent::OpenRequested => self.open(),
            WidgetEvent::CloseRequested | WidgetEvent::BackdropClicked => self.close(),
            WidgetEvent::SubmitRequested(text) => {
                let text = text.clone();
                self.submit(&text)
            }
            WidgetEvent::ViewportResized { width } => self.resize(*width),
            WidgetEvent::Tick(now) => self.tick(*now).map(|_| ()),
        };
        if let Err(e) = result {
            tracing::warn!(event = ?event, error = %e, "widget operation failed");
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Live scheduled replies not yet fired.
    pub fn pending_replies(&self) -> usize {
        self.replies.pending()
    }

    /// Earliest deadline among scheduled replies, for loop drivers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.replies.next_deadline()
    }

    /// Drop every scheduled reply. Teardown path; `close()` deliberately
    /// does not do this.
    pub fn cancel_pending(&mut self) {
        self.replies.cancel_all();
    }

    /// Messages from the given author currently in the transcript.
    pub fn count_by(&self, author: Author) -> usize {
        self.transcript.count_by(author)
    }
}
