//! Generative-AI oracle adapters.

pub mod gemini;
pub mod scripted;
pub mod types;

pub use gemini::GeminiClient;
pub use scripted::ScriptedOracle;
