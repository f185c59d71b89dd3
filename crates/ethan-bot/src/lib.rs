//! ETHAN MODE Telegram bot.
//!
//! Answers a handful of slash commands with persona-flavoured text, optionally
//! generated by an OpenAI-compatible service and optionally paired with a GIF.

pub mod app;
pub mod commands;
pub mod config;
pub mod delivery;
pub mod dispatcher;
pub mod error;
pub mod media;
pub mod persona;
pub mod random;
pub mod responder;

#[cfg(test)]
mod test_support;

pub use app::{launch, run, App};
pub use config::Config;
pub use error::{AppError, AppResult};
