use std::io::Read;
use std::io::Write;

use crate::aig;
use crate::aig::{AndGate, Header, Lit};
use crate::cnf;
use crate::cnf::{Clause, DimacsLit};
use crate::cursor::Cursor;
use crate::err::Result;
use crate::trace::{targets, Trace, TraceEvent};

/// Maps AIGER literals onto DIMACS literals. AIGER variable 0 (the
/// constant) has no DIMACS counterpart, so it becomes the extra variable
/// `M+1`, which the formula forces true.
#[derive(Debug, Clone, Copy)]
pub struct LitMap {
    maxvar: u64,
}

impl LitMap {
    pub fn new(h: &Header) -> LitMap {
        LitMap { maxvar: h.maxvar }
    }

    pub fn true_var(&self) -> DimacsLit {
        (self.maxvar + 1) as DimacsLit
    }

    /// Panics if `l` is not a literal of the circuit; every literal handed
    /// in here has already been range checked by the parser.
    pub fn translate(&self, l: Lit) -> DimacsLit {
        assert!(
            l <= 2 * self.maxvar + 1,
            "literal {} out of range for maximum variable {}",
            l,
            self.maxvar
        );
        let (n, positive) = match aig::lit_to_var(l) {
            // The helper stands for true, so FALSE_LIT is its negation.
            0 => (self.true_var(), aig::lit_sign(l)),
            v => (v as DimacsLit, !aig::lit_sign(l)),
        };
        if positive { n } else { -n }
    }
}

/// The three clauses making `lhs` equivalent to `rhs0 & rhs1`.
pub fn and_clauses(g: &AndGate, map: &LitMap) -> [Clause; 3] {
    let n = map.translate(g.lhs);
    let lv = map.translate(g.rhs0);
    let rv = map.translate(g.rhs1);
    [
        Clause::binary(-n, lv),
        Clause::binary(-n, rv),
        Clause::ternary(n, -lv, -rv),
    ]
}

/// Writes clauses, putting the problem line in front of the first one.
/// Holding the problem line back means nothing is written at all until the
/// circuit has got as far as producing a clause.
struct Emitter<'a, W> {
    out: &'a mut W,
    nvars: u64,
    nclauses: u64,
    written: u64,
}

impl<'a, W: Write> Emitter<'a, W> {
    fn new(out: &'a mut W, h: &Header) -> Self {
        Emitter {
            out,
            nvars: h.num_vars(),
            nclauses: h.num_clauses(),
            written: 0,
        }
    }

    fn clause(&mut self, c: &Clause) -> Result<()> {
        if self.written == 0 {
            cnf::write_dimacs_header(self.nvars, self.nclauses, self.out)?;
        }
        cnf::write_dimacs_clause(c, self.out)?;
        self.written += 1;
        Ok(())
    }
}

/// What a successful conversion wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub header: Header,
    pub output: Lit,
    pub clauses: u64,
}

/// Direct binary AIGER to DIMACS conversion. Gates are translated as they
/// are decoded; nothing is kept beyond the gate at hand.
pub fn aig_to_dimacs<R, W, T>(r: R, out: &mut W, trace: T) -> Result<Summary>
where
    R: Read,
    W: Write,
    T: Trace,
{
    let mut c = Cursor::with_trace(r, trace);
    let header = aig::parse_header(&mut c)?;
    log::info!(
        target: targets::EMIT,
        "read MILOA = {} {} {} {} {}",
        header.maxvar,
        header.ninputs,
        header.nlatches,
        header.noutputs,
        header.nands
    );
    let output = aig::parse_output(&mut c, &header)?;
    let map = LitMap::new(&header);
    let mut emitter = Emitter::new(out, &header);

    // Each gate defines its LHS.
    for i in 0..header.nands {
        let g = aig::parse_and_binary(&mut c, header.and_lit(i))?;
        c.trace_mut().event(TraceEvent::Gate(g));
        for clause in and_clauses(&g, &map).iter() {
            emitter.clause(clause)?;
        }
    }

    // The output is true.
    emitter.clause(&Clause::unit(map.translate(output)))?;

    // The constant node is true.
    emitter.clause(&Clause::unit(map.true_var()))?;

    debug_assert_eq!(emitter.written, emitter.nclauses);
    log::info!(
        target: targets::EMIT,
        "wrote p cnf {} {}",
        emitter.nvars,
        emitter.written
    );
    Ok(Summary {
        header,
        output,
        clauses: emitter.written,
    })
}
