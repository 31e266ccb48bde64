//! Translation of combinational binary AIGER circuits into DIMACS CNF.
//!
//! Only the subset without latches and with exactly one output is handled.
//! Each AND gate is Tseitin-encoded into three clauses as it is decoded, and
//! two unit clauses at the end force the output and the constant-true
//! variable. See [`aigtocnf::aig_to_dimacs`] for the streaming entry point
//! and [`io::run`] for the file level one used by the `aigtocnf` binary.

pub mod aig;
pub mod aigtocnf;
pub mod cnf;
pub mod config;
pub mod cursor;
pub mod err;
pub mod io;
pub mod trace;

pub use crate::aigtocnf::{aig_to_dimacs, Summary};
pub use crate::err::{Error, Result};
