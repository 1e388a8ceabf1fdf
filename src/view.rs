//! Display surface the widget renders into.
//!
//! The controller never touches a concrete display directly; it goes through
//! [`ChatView`] so the surrounding shell (terminal, GUI, test harness) can be
//! swapped out.

use crate::error::Result;
use crate::message::Author;

/// Operations the widget needs from whatever is displaying it.
///
/// A view whose backing surface has gone away should return
/// [`Error::ViewUnavailable`](crate::Error::ViewUnavailable); the dispatch
/// layer logs it and the operation degrades to a no-op.
pub trait ChatView {
    /// Show or hide the chat panel.
    fn set_open(&mut self, open: bool) -> Result<()>;

    /// Move input focus to the text-entry field.
    fn focus_input(&mut self) -> Result<()>;

    /// Clear the text-entry field.
    fn clear_input(&mut self) -> Result<()>;

    /// Append one transcript entry.
    fn append_entry(&mut self, author: Author, text: &str, time_label: &str) -> Result<()>;

    /// Scroll the transcript region to the newest entry.
    fn scroll_to_latest(&mut self) -> Result<()>;

    /// Show a blocking user-visible notice (validation failures).
    fn show_notice(&mut self, notice: &str) -> Result<()>;

    /// Switch between normal and narrow-viewport layout. Presentation only.
    fn set_compact(&mut self, compact: bool) -> Result<()>;
}

/// Terminal-backed view used by the demo binary.
pub struct ConsoleView {
    user_label: String,
    admin_label: String,
}

impl ConsoleView {
    pub fn new(user_label: impl Into<String>, admin_label: impl Into<String>) -> Self {
        Self {
            user_label: user_label.into(),
            admin_label: admin_label.into(),
        }
    }

    fn label(&self, author: Author) -> &str {
        match author {
            Author::User => &self.user_label,
            Author::Admin => &self.admin_label,
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new("You", "Admin")
    }
}

impl ChatView for ConsoleView {
    fn set_open(&mut self, open: bool) -> Result<()> {
        println!("-- chat {} --", if open { "opened" } else { "closed" });
        Ok(())
    }

    fn focus_input(&mut self) -> Result<()> {
        Ok(())
    }

    fn clear_input(&mut self) -> Result<()> {
        Ok(())
    }

    fn append_entry(&mut self, author: Author, text: &str, time_label: &str) -> Result<()> {
        println!("[{}] {}: {}", time_label, self.label(author), text);
        Ok(())
    }

    fn scroll_to_latest(&mut self) -> Result<()> {
        Ok(())
    }

    fn show_notice(&mut self, notice: &str) -> Result<()> {
        println!("!! {notice}");
        Ok(())
    }

    fn set_compact(&mut self, compact: bool) -> Result<()> {
        if compact {
            println!("-- narrow layout --");
        }
        Ok(())
    }
}
