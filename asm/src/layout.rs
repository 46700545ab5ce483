use arch::ROM_SIZE;
use std::collections::HashMap;

use crate::{
    error::{Error, LineError},
    ident::{Consts, Labels},
    msg::Msg,
    parser::{Code, Line, Stmt},
};

/// An instruction line bound to the address it will occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    pub addr: u16,
    pub line: usize,
    pub code: &'a Code,
}

/// Result of the first pass. Every table is final once this is built.
#[derive(Debug)]
pub struct Layout<'a> {
    pub consts: Consts,
    pub labels: Labels,
    pub placements: Vec<Placement<'a>>,
    pub warnings: Vec<Msg>,
}

impl<'a> Layout<'a> {
    pub fn run(lines: &'a [Line]) -> Result<Layout<'a>, LineError> {
        let mut consts = Consts::new();
        let mut labels = Labels::new();
        let mut placements = vec![];
        let mut warnings = vec![];
        let mut occupied: HashMap<u16, usize> = HashMap::new();
        let mut pc: u32 = 0;

        for line in lines {
            match &line.stmt {
                None => {}
                Some(Stmt::Err(code)) => {
                    return Err(Error::MalformedDirective(code.clone()).at(line.no));
                }
                Some(Stmt::Const(name, value)) => {
                    if let Some(prev) = consts.define(name, *value, line.no) {
                        warnings.push(Msg::warn(format!("Re-defined constant: `{}`", name), line.no));
                        warnings.push(Msg::note(
                            "Previous value defined here has been overridden".to_string(),
                            prev,
                        ));
                    }
                }
                Some(Stmt::Org(addr)) => pc = *addr,
                Some(Stmt::Label(name)) => {
                    labels
                        .define(name, pc, line.no)
                        .map_err(|prev| Error::DuplicateLabel(name.clone(), prev).at(line.no))?;
                }
                Some(Stmt::Code(code)) => {
                    // the slot after the last instruction must still be in ROM
                    let next = pc.saturating_add(1);
                    if next as usize >= ROM_SIZE {
                        return Err(Error::RomOverflow(pc, ROM_SIZE).at(line.no));
                    }
                    let addr = pc as u16;
                    if let Some(prev) = occupied.insert(addr, line.no) {
                        warnings.push(Msg::warn(
                            format!("Address 0x{:03X} is assigned twice", addr),
                            line.no,
                        ));
                        warnings.push(Msg::note(
                            "Overwritten instruction placed here".to_string(),
                            prev,
                        ));
                    }
                    placements.push(Placement {
                        addr,
                        line: line.no,
                        code,
                    });
                    pc = next;
                }
            }
        }

        Ok(Layout {
            consts,
            labels,
            placements,
            warnings,
        })
    }
}
