mod traits;
mod gemini;
mod client;

pub use traits::*;
pub use gemini::GeminiClient;
pub use client::{DegradeReason, ModelClient, Outcome};
