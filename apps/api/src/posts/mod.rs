// SARI post generation and refinement.
// Implements: voice catalog, template selection, prompt assembly, section parsing,
// generation and refinement pipelines. All model calls go through llm_client.

pub mod assembler;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod refiner;
pub mod templates;
pub mod voice;
