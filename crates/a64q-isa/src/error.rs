use thiserror::Error;

/// Opcode literal parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpcodeError {
    #[error("Opcode must start with 0x (hex) or 0b (binary): {0:?}")]
    InvalidFormat(String),
    #[error("Opcode has no digits after the {0} prefix")]
    MissingDigits(&'static str),
    #[error("Invalid {radix_name} digit {digit:?} in opcode")]
    InvalidDigit {
        digit: char,
        radix_name: &'static str,
    },
    #[error("Opcode value does not fit in 32 bits: {0:?}")]
    OutOfRange(String),
    #[error("Opcode too long: {0} bits (expected 32)")]
    TooManyBits(usize),
}

/// Encoding catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Malformed encoding {encoding}: {message}")]
    Malformed { encoding: String, message: String },
}
