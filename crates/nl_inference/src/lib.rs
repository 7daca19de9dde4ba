pub mod engine;
pub mod fallback;
pub mod models;
pub mod parser;
pub mod prompts;

pub use engine::ContentEngine;
pub use models::{create_model, DummyModel, OpenAiModel};
pub use parser::Extracted;
