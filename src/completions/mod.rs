//! Completion client for the Gemini `generateContent` API.

pub mod client;

pub use client::CompletionClient;
