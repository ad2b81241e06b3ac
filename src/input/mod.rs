mod errors;
mod record;
pub mod validation;

pub use errors::InputError;
pub use record::{InputRecord, RawInput, RawValue};
pub use validation::validate_input;
