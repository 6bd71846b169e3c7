// STAR evaluation: request validation, prompt compilation, the generator call,
// and validation of the generator's structured reply.
// All model calls go through the llm_client::Generator seam.

pub mod compiler;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod response;
pub mod service;
pub mod validation;
