//! Command implementations for the `primer` binary.

pub mod commands;

use crate::types::{ErrorKind, PrimerError};

/// Exit code for a rejected argument, including unknown demo names.
pub const EXIT_INVALID_ARGUMENT: i32 = 3;
/// Exit code for a missing key, index or element.
pub const EXIT_LOOKUP_MISS: i32 = 4;

/// Process exit code for a failed command.
pub fn exit_code(err: &PrimerError) -> i32 {
    match err.kind() {
        ErrorKind::InvalidArgument => EXIT_INVALID_ARGUMENT,
        ErrorKind::LookupMiss => EXIT_LOOKUP_MISS,
    }
}
