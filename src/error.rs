//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid integer '{token}' at position {position} in the number list")]
    InvalidInteger {
        token: String,
        position: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid target number '{token}'")]
    InvalidTarget {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Input ended before a list of numbers was provided")]
    MissingNumbers,

    #[error("Input ended before a target number was provided")]
    MissingTarget,
}
