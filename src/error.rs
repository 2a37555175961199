//! Error taxonomy. Per the core's error-handling design, there is no
//! recoverable error surface inside the datapath itself: undefined
//! opcodes/functs degrade to all-zero control signals by design (not an
//! error), and implementation faults (unreachable mux selector,
//! unsupported endianness, out-of-range memory access) terminate with a
//! diagnostic rather than unwinding through `Result`. Only the external
//! collaborators (CLI parsing, file loading) return `Result`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the simulator driver.
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("failed to load memory image: {0}")]
    ImageLoadError(#[from] ImageError),

    #[error("invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors related to parsing the plain-text register/instruction/data
/// memory image files described in spec.md §6.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to read image file '{0}': {1}")]
    FileReadError(PathBuf, #[source] std::io::Error),

    #[error("malformed line {line} in '{path}': {reason}")]
    ParseError { path: PathBuf, line: usize, reason: String },

    #[error("line {3}: address {0:#010x} in '{1}' is out of range for a {2}-byte image")]
    AddressOutOfBounds(u32, PathBuf, usize, usize),

    #[error("line {2}: register index {0} in '{1}' is out of range (0..32)")]
    RegisterIndexOutOfBounds(u32, PathBuf, usize),
}

pub type SimulatorResult<T> = Result<T, SimulatorError>;
