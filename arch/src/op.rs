use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use strum::{Display, EnumString};

/// Opcode table. The discriminant is the 4-bit opcode field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum OpKind {
    ADD = 0x0,
    SUB = 0x1,
    ADDI = 0x2,
    LOADI = 0x3,
    BEQZ = 0x4,
    BNEZ = 0x5,
    BLTZ = 0x6,
    BGTZ = 0x7,
    JUMP = 0x8,
    LDCMD = 0x9,
    BLIT = 0xA,
    MUL = 0xB,
}

impl OpKind {
    /// Looks up a mnemonic, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        s.to_ascii_lowercase().parse::<Self>().ok()
    }
}

// ----------------------------------------------------------------------------
// Operand shape

/// Width and signedness of an immediate carried in register-position fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub bits: u32,
    pub signed: bool,
}

impl Field {
    pub const IMM5: Field = Field {
        bits: 5,
        signed: true,
    };
    pub const IMM10: Field = Field {
        bits: 10,
        signed: true,
    };
    pub const UIMM10: Field = Field {
        bits: 10,
        signed: false,
    };

    pub fn range(&self) -> (i64, i64) {
        if self.signed {
            (-(1 << (self.bits - 1)), (1 << (self.bits - 1)) - 1)
        } else {
            (0, (1 << self.bits) - 1)
        }
    }

    pub fn mask(&self) -> i64 {
        (1 << self.bits) - 1
    }

    /// Range-checks `value` and returns it masked to the field width
    /// (two's complement for negative signed values).
    pub fn fit(&self, value: i64) -> Option<u16> {
        let (min, max) = self.range();
        if (min..=max).contains(&value) {
            Some((value & self.mask()) as u16)
        } else {
            None
        }
    }

    pub fn signedness(&self) -> &'static str {
        if self.signed {
            "signed"
        } else {
            "unsigned"
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit {}", self.bits, self.signedness())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Reg,
    Imm(Field),
    Label(Field),
}

impl OpKind {
    pub fn shape(&self) -> &'static [Arg] {
        use OpKind::*;
        match self {
            ADD | SUB | MUL => &[Arg::Reg, Arg::Reg, Arg::Reg],
            ADDI => &[Arg::Reg, Arg::Reg, Arg::Imm(Field::IMM5)],
            LOADI => &[Arg::Reg, Arg::Imm(Field::IMM10)],
            BEQZ | BNEZ | BLTZ | BGTZ => &[Arg::Reg, Arg::Label(Field::UIMM10)],
            JUMP => &[Arg::Label(Field::UIMM10)],
            LDCMD => &[Arg::Reg],
            BLIT => &[Arg::Imm(Field::UIMM10)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mnemonic() {
        assert_eq!(OpKind::parse("add"), Some(OpKind::ADD));
        assert_eq!(OpKind::parse("LdCmd"), Some(OpKind::LDCMD));
        assert_eq!(OpKind::parse("BLIT"), Some(OpKind::BLIT));
        assert_eq!(OpKind::parse("nop"), None);
        assert_eq!(OpKind::MUL.to_string(), "mul");
    }

    #[test]
    fn opcode_values() {
        assert_eq!(u8::from(OpKind::ADD), 0x0);
        assert_eq!(u8::from(OpKind::JUMP), 0x8);
        assert_eq!(u8::from(OpKind::MUL), 0xB);
        assert_eq!(OpKind::try_from(0xAu8).ok(), Some(OpKind::BLIT));
        assert!(OpKind::try_from(0xCu8).is_err());
    }

    #[test]
    fn field_ranges() {
        assert_eq!(Field::IMM5.range(), (-16, 15));
        assert_eq!(Field::IMM10.range(), (-512, 511));
        assert_eq!(Field::UIMM10.range(), (0, 1023));
    }

    #[test]
    fn field_fit() {
        assert_eq!(Field::IMM5.fit(15), Some(0x0F));
        assert_eq!(Field::IMM5.fit(16), None);
        assert_eq!(Field::IMM5.fit(-1), Some(0x1F));
        assert_eq!(Field::IMM5.fit(-16), Some(0x10));
        assert_eq!(Field::IMM5.fit(-17), None);
        assert_eq!(Field::IMM10.fit(0x3FF), None);
        assert_eq!(Field::IMM10.fit(-512), Some(0x200));
        assert_eq!(Field::UIMM10.fit(1023), Some(0x3FF));
        assert_eq!(Field::UIMM10.fit(-1), None);
        assert_eq!(Field::UIMM10.to_string(), "10-bit unsigned");
    }
}
