use std::io;
use std::io::Write;

/// A DIMACS literal: non-zero, sign is polarity.
pub type DimacsLit = isize;

/// A clause of at most three literals, which is all Tseitin-encoding an
/// AND gate ever needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    lits: [DimacsLit; 3],
    len: usize,
}

impl Clause {
    pub fn unit(a: DimacsLit) -> Clause {
        Clause { lits: [a, 0, 0], len: 1 }
    }

    pub fn binary(a: DimacsLit, b: DimacsLit) -> Clause {
        Clause { lits: [a, b, 0], len: 2 }
    }

    pub fn ternary(a: DimacsLit, b: DimacsLit, c: DimacsLit) -> Clause {
        Clause { lits: [a, b, c], len: 3 }
    }

    pub fn lits(&self) -> &[DimacsLit] {
        &self.lits[..self.len]
    }
}

pub fn write_dimacs_header<W: Write>(nvars: u64, nclauses: u64, w: &mut W) -> io::Result<()> {
    writeln!(w, "p cnf {} {}", nvars, nclauses)
}

pub fn write_dimacs_clause<W: Write>(c: &Clause, w: &mut W) -> io::Result<()> {
    for l in c.lits() {
        write!(w, "{} ", l)?;
    }
    writeln!(w, "0")
}
