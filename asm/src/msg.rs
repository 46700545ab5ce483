use crate::error::LineError;
use color_print::cprintln;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsgKind {
    Error,
    Warn,
    Note,
}

/// A diagnostic pointing at a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msg {
    pub kind: MsgKind,
    pub msg: String,
    pub line: usize,
}

impl Msg {
    pub fn error(msg: String, line: usize) -> Self {
        Msg {
            kind: MsgKind::Error,
            msg,
            line,
        }
    }
    pub fn warn(msg: String, line: usize) -> Self {
        Msg {
            kind: MsgKind::Warn,
            msg,
            line,
        }
    }
    pub fn note(msg: String, line: usize) -> Self {
        Msg {
            kind: MsgKind::Note,
            msg,
            line,
        }
    }
}

impl From<&LineError> for Msg {
    fn from(err: &LineError) -> Self {
        Msg::error(err.error.to_string(), err.line)
    }
}

impl Msg {
    pub fn print(&self, path: &str, src: &[&str]) {
        match self.kind {
            MsgKind::Error => cprintln!("<red,bold>error</>: {}", self.msg),
            MsgKind::Warn => cprintln!("<yellow,bold>warn</>: {}", self.msg),
            MsgKind::Note => cprintln!("<green,bold>note</>: {}", self.msg),
        }
        let raw = self
            .line
            .checked_sub(1)
            .and_then(|idx| src.get(idx))
            .copied()
            .unwrap_or("");
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, self.line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line, raw);
        cprintln!("      <blue>|</>");
    }
}

pub fn dump(msgs: &[Msg], path: &str, src: &[&str]) {
    for msg in msgs {
        msg.print(path, src);
    }
}
