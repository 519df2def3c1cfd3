//! Translation flow and the Lambda handlers that drive it

pub mod handler;
pub mod translate;

// Re-export the handlers for convenience
pub use handler::{reaction_translate_handler, run_function, translate_message_handler};
pub use translate::translate_message;
