//! Two-pass assembler for the blitter co-processor.
//!
//! Source lines are classified once ([`parser`]), laid out into addresses
//! while labels and constants are collected ([`layout`]), then encoded into a
//! 1024-word [`image::Image`] ([`encode`]).

pub mod encode;
pub mod error;
pub mod ident;
pub mod image;
pub mod layout;
pub mod msg;
pub mod parser;
pub mod resolve;

use error::LineError;
use image::Image;
use msg::Msg;

#[derive(Debug)]
pub struct Assembly {
    pub image: Image,
    pub warnings: Vec<Msg>,
}

/// Assembles a whole source file. The first error aborts the run.
pub fn assemble(src: &str) -> Result<Assembly, LineError> {
    let lines = parser::parse_source(src);
    let layout = layout::Layout::run(&lines)?;
    let image = encode::encode(&layout)?;
    Ok(Assembly {
        image,
        warnings: layout.warnings,
    })
}
