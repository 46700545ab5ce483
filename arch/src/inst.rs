use crate::{
    op::OpKind,
    reg::Reg,
    word::{join10, split10, Word},
};

/// A fully resolved instruction. Immediates and addresses are stored as the
/// raw field bits (already masked to their width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    ADD(Reg, Reg, Reg),
    SUB(Reg, Reg, Reg),
    MUL(Reg, Reg, Reg),
    ADDI(Reg, Reg, u16),
    LOADI(Reg, u16),
    BEQZ(Reg, u16),
    BNEZ(Reg, u16),
    BLTZ(Reg, u16),
    BGTZ(Reg, u16),
    JUMP(u16),
    LDCMD(Reg),
    BLIT(u16),
}

impl Inst {
    /// Builds an instruction from operand values resolved in the order of
    /// `op.shape()`: register indices for `Arg::Reg`, masked bits otherwise.
    /// Returns `None` when fewer operands than the shape requires are given.
    pub fn assemble(op: OpKind, args: &[u16]) -> Option<Inst> {
        let r = |v: u16| Reg::from(v as u8);
        let inst = match (op, args) {
            (OpKind::ADD, &[rd, rs1, rs2, ..]) => Inst::ADD(r(rd), r(rs1), r(rs2)),
            (OpKind::SUB, &[rd, rs1, rs2, ..]) => Inst::SUB(r(rd), r(rs1), r(rs2)),
            (OpKind::MUL, &[rd, rs1, rs2, ..]) => Inst::MUL(r(rd), r(rs1), r(rs2)),
            (OpKind::ADDI, &[rd, rs1, imm, ..]) => Inst::ADDI(r(rd), r(rs1), imm),
            (OpKind::LOADI, &[rd, imm, ..]) => Inst::LOADI(r(rd), imm),
            (OpKind::BEQZ, &[rs1, addr, ..]) => Inst::BEQZ(r(rs1), addr),
            (OpKind::BNEZ, &[rs1, addr, ..]) => Inst::BNEZ(r(rs1), addr),
            (OpKind::BLTZ, &[rs1, addr, ..]) => Inst::BLTZ(r(rs1), addr),
            (OpKind::BGTZ, &[rs1, addr, ..]) => Inst::BGTZ(r(rs1), addr),
            (OpKind::JUMP, &[addr, ..]) => Inst::JUMP(addr),
            (OpKind::LDCMD, &[rd, ..]) => Inst::LDCMD(r(rd)),
            (OpKind::BLIT, &[imm, ..]) => Inst::BLIT(imm),
            _ => return None,
        };
        Some(inst)
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Inst::ADD(..) => OpKind::ADD,
            Inst::SUB(..) => OpKind::SUB,
            Inst::MUL(..) => OpKind::MUL,
            Inst::ADDI(..) => OpKind::ADDI,
            Inst::LOADI(..) => OpKind::LOADI,
            Inst::BEQZ(..) => OpKind::BEQZ,
            Inst::BNEZ(..) => OpKind::BNEZ,
            Inst::BLTZ(..) => OpKind::BLTZ,
            Inst::BGTZ(..) => OpKind::BGTZ,
            Inst::JUMP(..) => OpKind::JUMP,
            Inst::LDCMD(..) => OpKind::LDCMD,
            Inst::BLIT(..) => OpKind::BLIT,
        }
    }
}

impl Inst {
    pub fn to_word(&self) -> Word {
        let op = self.kind();
        match *self {
            Inst::ADD(rd, rs1, rs2) | Inst::SUB(rd, rs1, rs2) | Inst::MUL(rd, rs1, rs2) => {
                Word::new(op, rd.into(), rs1.into(), rs2.into())
            }
            Inst::ADDI(rd, rs1, imm) => Word::new(op, rd.into(), rs1.into(), imm as u8),
            Inst::LOADI(rd, imm) => {
                let (hi, lo) = split10(imm);
                Word::new(op, rd.into(), hi, lo)
            }
            Inst::BEQZ(rs1, addr)
            | Inst::BNEZ(rs1, addr)
            | Inst::BLTZ(rs1, addr)
            | Inst::BGTZ(rs1, addr) => {
                let (hi, lo) = split10(addr);
                Word::new(op, hi, rs1.into(), lo)
            }
            Inst::JUMP(addr) => {
                let (hi, lo) = split10(addr);
                Word::new(op, hi, 0, lo)
            }
            Inst::LDCMD(rd) => Word::new(op, rd.into(), 0, 0),
            Inst::BLIT(imm) => {
                let (hi, lo) = split10(imm);
                Word::new(op, 0, hi, lo)
            }
        }
    }

    /// Decodes a word. Fields an instruction does not use are ignored;
    /// opcodes outside the table yield `None`.
    pub fn from_word(word: Word) -> Option<Inst> {
        let op = OpKind::try_from(word.opcode).ok()?;
        let Word { rd, rs1, rs2, .. } = word;
        let (rd16, rs1_16, rs2_16) = (rd as u16, rs1 as u16, rs2 as u16);
        let args: Vec<u16> = match op {
            OpKind::ADD | OpKind::SUB | OpKind::MUL | OpKind::ADDI => vec![rd16, rs1_16, rs2_16],
            OpKind::LOADI => vec![rd16, join10(rs1, rs2)],
            OpKind::BEQZ | OpKind::BNEZ | OpKind::BLTZ | OpKind::BGTZ => {
                vec![rs1_16, join10(rd, rs2)]
            }
            OpKind::JUMP => vec![join10(rd, rs2)],
            OpKind::LDCMD => vec![rd16],
            OpKind::BLIT => vec![join10(rs1, rs2)],
        };
        Inst::assemble(op, &args)
    }
}
