use arch::{
    op::{Arg, Field},
    reg::Reg,
};

use crate::{
    error::Error,
    ident::{Consts, Labels},
};

pub fn parse_reg(tok: &str) -> Result<Reg, Error> {
    Reg::parse(tok).ok_or_else(|| Error::InvalidRegister(tok.to_string()))
}

/// Operand integer: a defined constant, `0x` hexadecimal, or signed decimal.
pub fn parse_int(tok: &str, consts: &Consts) -> Result<i64, Error> {
    if let Some(val) = consts.get(tok) {
        return Ok(val);
    }
    let val = match tok.strip_prefix("0x") {
        Some(hex) if is_digits(hex, 16) => i64::from_str_radix(hex, 16).ok(),
        Some(_) => None,
        None => tok.parse::<i64>().ok(),
    };
    val.ok_or_else(|| Error::ParseInt(tok.to_string()))
}

/// Directive integer: optional sign, then `0x` / `0o` / `0b` prefix or decimal.
pub fn parse_with_prefix(s: &str) -> Option<i64> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let prefix = body.get(0..2).map(|p| p.to_ascii_lowercase());
    let (radix, digits) = match prefix.as_deref() {
        Some("0x") => (16, &body[2..]),
        Some("0o") => (8, &body[2..]),
        Some("0b") => (2, &body[2..]),
        _ => (10, body),
    };
    if !is_digits(digits, radix) {
        return None;
    }
    // decimal literals with a leading zero are ambiguous; only zero itself may
    if radix == 10 && digits.starts_with('0') && !digits.trim_start_matches('0').is_empty() {
        return None;
    }
    let val = i64::from_str_radix(digits, radix).ok()?;
    Some(if neg { -val } else { val })
}

fn is_digits(s: &str, radix: u32) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_digit(radix))
}

pub fn fit(value: i64, field: Field) -> Result<u16, Error> {
    field
        .fit(value)
        .ok_or(Error::OutOfRange(value, field.bits, field.signedness()))
}

/// Resolves one operand token into the bits it contributes to the word.
pub fn operand(arg: Arg, tok: &str, consts: &Consts, labels: &Labels) -> Result<u16, Error> {
    match arg {
        Arg::Reg => parse_reg(tok).map(|reg| u8::from(reg) as u16),
        Arg::Imm(field) => fit(parse_int(tok, consts)?, field),
        Arg::Label(field) => {
            let pc = labels
                .get(tok)
                .ok_or_else(|| Error::UnknownLabel(tok.to_string()))?;
            fit(pc as i64, field)
        }
    }
}
