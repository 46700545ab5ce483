use arch::{inst::Inst, op::OpKind};

use crate::{
    error::Error,
    ident::{Consts, Labels},
    resolve,
};

pub const COMMENT: char = ';';

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based
    pub no: usize,
    pub raw: String,
    pub stmt: Option<Stmt>,
}

impl Line {
    pub fn parse(idx: usize, raw: &str) -> Line {
        Line {
            no: idx + 1,
            raw: raw.to_string(),
            stmt: Stmt::parse(strip_comment(raw)),
        }
    }
}

/// Classifies every line of `src`. Malformed lines are kept as `Stmt::Err`
/// so each pass reports problems in source order.
pub fn parse_source(src: &str) -> Vec<Line> {
    src.lines()
        .enumerate()
        .map(|(idx, raw)| Line::parse(idx, raw))
        .collect()
}

pub fn strip_comment(raw: &str) -> &str {
    match raw.split_once(COMMENT) {
        Some((code, _)) => code.trim(),
        None => raw.trim(),
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A `.const` / `.org` line that could not be read
    Err(String),
    Const(String, i64),
    Org(u32),
    Label(String),
    Code(Code),
}

impl Stmt {
    /// `code` must already be comment-stripped and trimmed.
    pub fn parse(code: &str) -> Option<Stmt> {
        if code.is_empty() {
            return None;
        }

        let words: Vec<&str> = code.split_whitespace().collect();
        let malformed = || Stmt::Err(code.to_string());

        let stmt = match words.as_slice() {
            // .const NAME VALUE
            [".const", rest @ ..] => match rest {
                [name, value] => match resolve::parse_with_prefix(value) {
                    Some(value) => Stmt::Const(name.to_string(), value),
                    None => malformed(),
                },
                _ => malformed(),
            },
            // .org ADDR
            [".org", rest @ ..] => match rest {
                [addr] => match resolve::parse_with_prefix(addr).and_then(|v| u32::try_from(v).ok()) {
                    Some(addr) => Stmt::Org(addr),
                    None => malformed(),
                },
                _ => malformed(),
            },
            // name:
            _ if code.ends_with(':') => {
                let name = code[..code.len() - 1].trim_end();
                Stmt::Label(name.to_string())
            }
            _ => Stmt::Code(Code::parse(code)),
        };
        Some(stmt)
    }
}

// ----------------------------------------------------------------------------
// Operation

#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub mnemonic: String,
    /// `None` when the mnemonic is not in the opcode table. The line still
    /// takes a slot and fails when encoded.
    pub op: Option<OpKind>,
    pub args: Vec<String>,
}

impl Code {
    fn parse(code: &str) -> Code {
        let mut toks = code
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty());
        let mnemonic = toks.next().unwrap_or(code);
        Code {
            mnemonic: mnemonic.to_string(),
            op: OpKind::parse(mnemonic),
            args: toks.map(str::to_string).collect(),
        }
    }

    /// Resolves operands left to right against the final tables.
    pub fn resolve(&self, consts: &Consts, labels: &Labels) -> Result<Inst, Error> {
        let op = self
            .op
            .ok_or_else(|| Error::UnknownOpcode(self.mnemonic.clone()))?;
        let shape = op.shape();
        let vals = shape
            .iter()
            .zip(&self.args)
            .map(|(arg, tok)| resolve::operand(*arg, tok, consts, labels))
            .collect::<Result<Vec<u16>, Error>>()?;
        Inst::assemble(op, &vals)
            .ok_or_else(|| Error::OperandCount(op.to_string(), shape.len(), self.args.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::reg::Reg;

    fn code(mnemonic: &str, op: OpKind, args: &[&str]) -> Option<Stmt> {
        Some(Stmt::Code(Code {
            mnemonic: mnemonic.to_string(),
            op: Some(op),
            args: args.iter().map(|a| a.to_string()).collect(),
        }))
    }

    #[test]
    fn classify() {
        assert_eq!(Stmt::parse(""), None);
        assert_eq!(
            Stmt::parse(".const PI 3"),
            Some(Stmt::Const("PI".to_string(), 3))
        );
        assert_eq!(Stmt::parse(".org 0x100"), Some(Stmt::Org(0x100)));
        assert_eq!(
            Stmt::parse("loop:"),
            Some(Stmt::Label("loop".to_string()))
        );
        assert_eq!(
            Stmt::parse("ADDI r1,r2, -3"),
            code("ADDI", OpKind::ADDI, &["r1", "r2", "-3"])
        );
        assert_eq!(
            Stmt::parse("jump   end"),
            code("jump", OpKind::JUMP, &["end"])
        );
    }

    #[test]
    fn comments() {
        assert_eq!(strip_comment("  add r1, r2, r3 ; sum"), "add r1, r2, r3");
        assert_eq!(strip_comment("; whole line"), "");
        assert_eq!(strip_comment("end: ;; label"), "end:");
        let line = Line::parse(4, "  ldcmd r2   ; fetch");
        assert_eq!(line.no, 5);
        assert_eq!(line.stmt, code("ldcmd", OpKind::LDCMD, &["r2"]));
    }

    #[test]
    fn malformed_directives() {
        for src in [
            ".const PI",
            ".const PI 3 4",
            ".const PI three",
            ".const PI 010",
            ".org",
            ".org -1",
            ".org 1 2",
        ] {
            assert_eq!(Stmt::parse(src), Some(Stmt::Err(src.to_string())), "{src}");
        }
    }

    #[test]
    fn unknown_mnemonic_is_kept() {
        let lines = parse_source("add r1, r2, r3\n\nfoo r1");
        assert_eq!(lines.len(), 3);
        match &lines[2].stmt {
            Some(Stmt::Code(code)) => {
                assert_eq!(code.op, None);
                assert!(matches!(
                    code.resolve(&Consts::new(), &Labels::new()),
                    Err(Error::UnknownOpcode(op)) if op == "foo"
                ));
            }
            other => panic!("{other:?}"),
        }
        assert!(matches!(
            Stmt::parse(".data 4"),
            Some(Stmt::Code(Code { op: None, .. }))
        ));
    }

    #[test]
    fn resolve_operands() {
        let mut consts = Consts::new();
        consts.define("STEP", -2, 1);
        let mut labels = Labels::new();
        labels.define("top", 3, 2).unwrap();

        let parse = |src: &str| match Stmt::parse(src) {
            Some(Stmt::Code(code)) => code,
            other => panic!("{other:?}"),
        };

        assert_eq!(
            parse("addi r1, r1, STEP").resolve(&consts, &labels).ok(),
            Some(Inst::ADDI(Reg::R1, Reg::R1, 0x1E))
        );
        assert_eq!(
            parse("bnez r4, top").resolve(&consts, &labels).ok(),
            Some(Inst::BNEZ(Reg::R4, 3))
        );
        assert!(matches!(
            parse("add r1, r2").resolve(&consts, &labels),
            Err(Error::OperandCount(op, 3, 2)) if op == "add"
        ));
        assert!(matches!(
            parse("add r1, x2").resolve(&consts, &labels),
            Err(Error::InvalidRegister(r)) if r == "x2"
        ));
        // extra operands are ignored
        assert_eq!(
            parse("ldcmd r7 r8").resolve(&consts, &labels).ok(),
            Some(Inst::LDCMD(Reg::R7))
        );
    }
}
