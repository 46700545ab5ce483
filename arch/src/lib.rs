pub mod inst;
pub mod op;
pub mod reg;
pub mod word;

/// Number of words in program memory.
pub const ROM_SIZE: usize = 1024;
