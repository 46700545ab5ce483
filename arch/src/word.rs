use crate::op::OpKind;

// ----------------------------------------------------------------------------

const REG_MASK: u8 = 0x1F;

/// Packed instruction word: `opcode<<15 | rd<<10 | rs1<<5 | rs2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Word {
    pub opcode: u8,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
}

fn enc_format(opcode: u8, rd: u8, rs1: u8, rs2: u8) -> u32 {
    ((opcode as u32 & 0xF) << 15)
        | ((rd as u32 & 0x1F) << 10)
        | ((rs1 as u32 & 0x1F) << 5)
        | (rs2 as u32 & 0x1F)
}

fn dec_format(bin: u32) -> (u8, u8, u8, u8) {
    let opcode = ((bin >> 15) & 0xF) as u8;
    let rd = ((bin >> 10) & 0x1F) as u8;
    let rs1 = ((bin >> 5) & 0x1F) as u8;
    let rs2 = (bin & 0x1F) as u8;
    (opcode, rd, rs1, rs2)
}

impl Word {
    pub fn new(op: OpKind, rd: u8, rs1: u8, rs2: u8) -> Word {
        Word {
            opcode: op.into(),
            rd: rd & REG_MASK,
            rs1: rs1 & REG_MASK,
            rs2: rs2 & REG_MASK,
        }
    }

    pub fn to_bin(&self) -> u32 {
        enc_format(self.opcode, self.rd, self.rs1, self.rs2)
    }

    pub fn from_bin(bin: u32) -> Word {
        let (opcode, rd, rs1, rs2) = dec_format(bin);
        Word {
            opcode,
            rd,
            rs1,
            rs2,
        }
    }
}

// ----------------------------------------------------------------------------
// 10-bit values spread over two register fields

pub fn split10(v: u16) -> (u8, u8) {
    (((v >> 5) & 0x1F) as u8, (v & 0x1F) as u8)
}

pub fn join10(hi: u8, lo: u8) -> u16 {
    ((hi as u16 & 0x1F) << 5) | (lo as u16 & 0x1F)
}

#[test]
fn test_format_all() {
    for opcode in 0..=0xF {
        for rd in 0..=0x1F {
            for rs1 in 0..=0x1F {
                for rs2 in 0..=0x1F {
                    let bin = enc_format(opcode, rd, rs1, rs2);
                    assert!(bin < 1 << 19);
                    assert_eq!((opcode, rd, rs1, rs2), dec_format(bin));
                }
            }
        }
    }
}

#[test]
fn test_layout() {
    assert_eq!(Word::new(OpKind::MUL, 1, 2, 3).to_bin(), 0x5_8443);
    assert_eq!(Word::new(OpKind::BLIT, 0, 0x1F, 0x1F).to_bin(), 0x5_03FF);
    assert_eq!(Word::from_bin(0x5_8443), Word::new(OpKind::MUL, 1, 2, 3));
}

#[test]
fn test_split10() {
    assert_eq!(split10(511), (0x0F, 0x1F));
    assert_eq!(split10(0x3FF), (0x1F, 0x1F));
    assert_eq!(join10(0x0F, 0x1F), 511);
}
