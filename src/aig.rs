use std::fmt;
use std::io;
use std::io::Read;
use std::io::Write;

use crate::cursor::Cursor;
use crate::err::{Error, Position, Result, Unsupported};
use crate::trace::Trace;

pub type Var = u64;
pub type Lit = u64;

pub static FALSE_LIT: Lit = 0;
pub static TRUE_LIT: Lit = 1;
pub fn lit_sign(l: Lit) -> bool { l & 1 == 1 }
pub fn lit_not(l: Lit) -> Lit { l ^ 1 }
pub fn var_to_lit(v: Var) -> Lit { v << 1 }
pub fn lit_to_var(l: Lit) -> Var { l >> 1 }

/// Largest maximum variable index accepted in a header. Keeps `2*M+1` and
/// `3*A+2` representable, and every variable a valid DIMACS literal.
pub const MAX_VAR_INDEX: u64 = (isize::MAX as u64 - 1) / 2;

/// The `M I L O A` counts of an AIGER header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub maxvar: u64,
    pub ninputs: u64,
    pub nlatches: u64,
    pub noutputs: u64,
    pub nands: u64,
}

impl Header {
    pub fn max_lit(&self) -> Lit {
        var_to_lit(self.maxvar) + 1
    }

    /// Output literal of the `i`th AND gate.
    pub fn and_lit(&self, i: u64) -> Lit {
        var_to_lit(self.ninputs + 1 + i)
    }

    /// DIMACS variables: the circuit's, plus one standing for constant true.
    pub fn num_vars(&self) -> u64 {
        self.maxvar + 1
    }

    /// Three clauses per gate, plus the output and constant units.
    pub fn num_clauses(&self) -> u64 {
        3 * self.nands + 2
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aig {} {} {} {} {}",
            self.maxvar, self.ninputs, self.nlatches, self.noutputs, self.nands
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndGate {
    pub lhs: Lit,
    pub rhs0: Lit,
    pub rhs1: Lit,
}

impl AndGate {
    /// Rebuild a gate from its binary encoding. `None` if either delta
    /// reaches below literal 0.
    pub fn from_deltas(lhs: Lit, d0: u64, d1: u64) -> Option<AndGate> {
        let rhs0 = lhs.checked_sub(d0)?;
        let rhs1 = rhs0.checked_sub(d1)?;
        Some(AndGate { lhs, rhs0, rhs1 })
    }

    pub fn deltas(&self) -> (u64, u64) {
        (self.lhs - self.rhs0, self.rhs0 - self.rhs1)
    }
}

pub fn push_delta<W: Write>(delta: u64, w: &mut W) -> io::Result<()> {
    let mut tmp = delta;
    while (tmp & !0x7f) != 0 {
        w.write_all(&[((tmp & 0x7f) | 0x80) as u8])?;
        tmp >>= 7;
    }
    w.write_all(&[tmp as u8])
}

pub fn pop_delta<R: Read, T: Trace>(c: &mut Cursor<R, T>) -> Result<u64> {
    let mut x: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let ch = c.safe_get()?;
        let bits = u64::from(ch & 0x7f);
        if shift >= u64::BITS || (bits << shift) >> shift != bits {
            return Err(Error::IntegerOverflow(c.position()));
        }
        x |= bits << shift;
        if ch & 0x80 == 0 {
            return Ok(x);
        }
        shift += 7;
    }
}

/// Reads a decimal integer which must be followed by `expected`.
pub fn parse_int<R: Read, T: Trace>(c: &mut Cursor<R, T>, expected: u8) -> Result<u64> {
    let ch = c.safe_get()?;
    if !ch.is_ascii_digit() {
        return Err(Error::MalformedInteger(c.position()));
    }
    let mut res = u64::from(ch - b'0');
    loop {
        let ch = c.safe_get()?;
        if !ch.is_ascii_digit() {
            if ch != expected {
                return Err(Error::UnexpectedTerminator {
                    pos: c.position(),
                    expected: char::from(expected),
                    found: char::from(ch),
                });
            }
            return Ok(res);
        }
        res = res
            .checked_mul(10)
            .and_then(|r| r.checked_add(u64::from(ch - b'0')))
            .ok_or(Error::IntegerOverflow(c.position()))?;
    }
}

fn invalid_header(pos: Position, reason: &str) -> Error {
    Error::InvalidHeader {
        pos,
        reason: reason.to_string(),
    }
}

/// Parses `aig M I L O A\n`, rejecting anything outside the combinational,
/// single-output subset as soon as the offending count has been read.
pub fn parse_header<R: Read, T: Trace>(c: &mut Cursor<R, T>) -> Result<Header> {
    for &expected in b"aig " {
        if c.safe_get()? != expected {
            return Err(invalid_header(c.position(), "expected 'aig' header line"));
        }
    }
    let maxvar = parse_int(c, b' ')?;
    let ninputs = parse_int(c, b' ')?;

    let nlatches = parse_int(c, b' ')?;
    if nlatches > 0 {
        return Err(Error::UnsupportedFeature {
            pos: c.position(),
            feature: Unsupported::Latches(nlatches),
        });
    }

    let noutputs = parse_int(c, b' ')?;
    if noutputs != 1 {
        return Err(Error::UnsupportedFeature {
            pos: c.position(),
            feature: Unsupported::Outputs(noutputs),
        });
    }

    let nands = parse_int(c, b'\n')?;
    if ninputs.checked_add(nands) != Some(maxvar) {
        return Err(Error::InvalidHeader {
            pos: c.position(),
            reason: format!("M = {} but I + A = {} + {}", maxvar, ninputs, nands),
        });
    }
    if maxvar > MAX_VAR_INDEX {
        return Err(Error::IntegerOverflow(c.position()));
    }

    Ok(Header {
        maxvar,
        ninputs,
        nlatches,
        noutputs,
        nands,
    })
}

pub fn parse_output<R: Read, T: Trace>(c: &mut Cursor<R, T>, h: &Header) -> Result<Lit> {
    let lit = parse_int(c, b'\n')?;
    if lit > h.max_lit() {
        return Err(Error::LiteralOutOfRange {
            pos: c.position(),
            lit,
            max: h.max_lit(),
        });
    }
    Ok(lit)
}

/// Reads the two deltas of the gate whose output literal is `lhs`.
pub fn parse_and_binary<R: Read, T: Trace>(c: &mut Cursor<R, T>, lhs: Lit) -> Result<AndGate> {
    let d0 = pop_delta(c)?;
    let rhs0 = lhs.checked_sub(d0).ok_or(Error::InvalidGateEncoding {
        pos: c.position(),
        lhs,
        delta: d0,
        bound: lhs,
    })?;
    let d1 = pop_delta(c)?;
    let rhs1 = rhs0.checked_sub(d1).ok_or(Error::InvalidGateEncoding {
        pos: c.position(),
        lhs,
        delta: d1,
        bound: rhs0,
    })?;
    Ok(AndGate { lhs, rhs0, rhs1 })
}
