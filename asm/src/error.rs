use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Syntax
    #[error("Unknown opcode: `{0}`")]
    UnknownOpcode(String),

    #[error("Malformed directive: `{0}`")]
    MalformedDirective(String),

    #[error("Wrong operand count: `{0}` takes {1} operand(s), found {2}")]
    OperandCount(String, usize, usize),

    // Resolution
    #[error("Invalid register: `{0}`")]
    InvalidRegister(String),

    #[error("Cannot parse `{0}` as integer")]
    ParseInt(String),

    #[error("Unknown label: `{0}`")]
    UnknownLabel(String),

    // Range
    #[error("Value {0} does not fit in {1}-bit {2} field")]
    OutOfRange(i64, u32, &'static str),

    // Structure
    #[error("Duplicate label: `{0}` (first defined at line {1})")]
    DuplicateLabel(String, usize),

    #[error("ROM overflow: instruction at 0x{0:03X} reaches the end of the {1}-word ROM")]
    RomOverflow(u32, usize),

    // Files
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn at(self, line: usize) -> LineError {
        LineError { line, error: self }
    }
}

/// A source error tagged with the 1-based line it was found on.
#[derive(Error, Debug)]
#[error("{error} (line {line})")]
pub struct LineError {
    pub line: usize,
    pub error: Error,
}
