//! Interactive full-screen terminal UI

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
