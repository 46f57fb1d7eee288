//! # gridquery-llm
//!
//! Chat-completion client for gridquery. The wire contract is the
//! OpenAI-compatible one: an ordered list of role-tagged messages, a model
//! identifier, a sampling temperature and a token budget go in; one
//! completion text comes out.
//!
//! Configuration ([`LlmConfig`]) is injected at construction; nothing here
//! holds global state.

pub mod chat;
pub mod client;
pub mod config;
pub mod error;

pub use chat::{ChatMessage, ChatRole};
pub use client::{ChatClient, HttpChatClient};
pub use config::LlmConfig;
pub use error::{LlmError, LlmResult};
