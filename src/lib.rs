//! Chat widget simulator
//!
//! A standalone rendition of the support-chat widget from a gaming-community
//! demo site. User messages go into an in-memory transcript; after a
//! randomized delay a canned admin reply is appended. No server, no
//! persistence, no real messaging.

pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod reply;
pub mod schedule;
pub mod view;
pub mod widget;

pub use error::{Error, Result};
pub use widget::ChatWidget;
