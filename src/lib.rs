pub mod agents;
pub mod config;
pub mod extract;
pub mod llm;
