use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Reg {
    #[default]
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    R16,
    R17,
    R18,
    R19,
    R20,
    R21,
    R22,
    R23,
    R24,
    R25,
    R26,
    R27,
    R28,
    R29,
    R30,
    R31,
}

impl Reg {
    /// Accepts `r0` .. `r31` exactly as written.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}
