pub mod caught_error;
pub mod error_output;
pub mod options;
