use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or running a program.
///
/// `line` is the 0-based address of the offending instruction.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("line {line}: invalid opcode `{opcode}`")]
    InvalidOpcode { line: usize, opcode: String },

    #[error("line {line}: {reason}")]
    MalformedInstruction { line: usize, reason: &'static str },

    #[error("line {line}: register `{register}` read before it was written")]
    UnboundRegister { line: usize, register: String },

    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}
