use aigtocnf::aig;
use aigtocnf::config::Config;
use aigtocnf::cursor::Cursor;
use aigtocnf::io;
use aigtocnf::trace::NoTrace;
use aigtocnf::{aig_to_dimacs, Error};

use batsat::callbacks;
use batsat::clause;
use batsat::core::SolverOpts;
use batsat::interface::SolverInterface;
use batsat::lbool;
use batsat::BasicSolver;

use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

fn read_file(filename: &str) -> Vec<u8> {
    let mut fin = File::open(Path::new(filename)).ok().unwrap(); // Panic = failed test
    let mut buf = Vec::new();
    fin.read_to_end(&mut buf).ok().unwrap();
    buf
}

fn convert_file(filename: &str) -> Result<String, Error> {
    let input = read_file(filename);
    let mut out = Vec::new();
    aig_to_dimacs(&input[..], &mut out, NoTrace)?;
    Ok(String::from_utf8(out).unwrap())
}

/// Problem line counts plus every clause, zero terminators stripped.
fn parse_dimacs(s: &str) -> (usize, usize, Vec<Vec<isize>>) {
    let mut lines = s.lines();
    let header: Vec<usize> = lines
        .next()
        .unwrap()
        .trim_start_matches("p cnf ")
        .split(' ')
        .map(|w| w.parse().unwrap())
        .collect();
    let clauses = lines
        .map(|l| {
            let mut lits: Vec<isize> = l.split(' ').map(|w| w.parse().unwrap()).collect();
            assert_eq!(lits.pop(), Some(0));
            lits
        })
        .collect();
    (header[0], header[1], clauses)
}

fn solve(s: &str) -> lbool {
    let (nvars, _, clauses) = parse_dimacs(s);
    let mut solver = BasicSolver::new(SolverOpts::default(), callbacks::Basic::new());
    let vars: Vec<clause::Var> = (0..nvars).map(|_| solver.new_var_default()).collect();
    let mut lits: Vec<clause::Lit> = vec![];
    for c in clauses {
        lits.clear();
        for l in c {
            lits.push(clause::Lit::new(vars[l.abs() as usize - 1], l > 0));
        }
        solver.add_clause_reuse(&mut lits);
    }
    solver.solve_limited(&[])
}

const CONVERTIBLE: [&str; 7] = [
    "test-aig/and",
    "test-aig/contradiction",
    "test-aig/false",
    "test-aig/inverter",
    "test-aig/or",
    "test-aig/true",
    "test-aig/xor",
];

#[test]
fn test_convert_aigers() {
    for f in CONVERTIBLE.iter() {
        let out = convert_file(&format!("{}.aig", f)).unwrap();
        let expected = String::from_utf8(read_file(&format!("{}.cnf", f))).unwrap();
        if out != expected {
            panic!("Unexpected formula for {}:\n{}", f, out);
        }
    }
}

#[test]
fn test_counts_match_header() {
    for f in CONVERTIBLE.iter() {
        let out = convert_file(&format!("{}.aig", f)).unwrap();
        let input = read_file(&format!("{}.aig", f));
        let h = aig::parse_header(&mut Cursor::new(&input[..])).unwrap();
        let (nvars, nclauses, clauses) = parse_dimacs(&out);
        assert_eq!(nvars as u64, h.maxvar + 1);
        assert_eq!(nclauses as u64, 3 * h.nands + 2);
        assert_eq!(clauses.len(), nclauses);
        for c in &clauses {
            assert!(c.iter().all(|&l| l != 0 && l.abs() as usize <= nvars));
        }
        // Output, then constant true.
        assert_eq!(clauses[nclauses - 1], vec![nvars as isize]);
        assert_eq!(clauses[nclauses - 2].len(), 1);
    }
}

#[test]
fn test_equisatisfiable() {
    let sat = ["test-aig/and", "test-aig/or", "test-aig/true", "test-aig/inverter", "test-aig/xor"];
    let unsat = ["test-aig/false", "test-aig/contradiction"];
    for f in sat.iter() {
        let out = convert_file(&format!("{}.aig", f)).unwrap();
        assert!(solve(&out) == lbool::TRUE, "{} should be satisfiable", f);
    }
    for f in unsat.iter() {
        let out = convert_file(&format!("{}.aig", f)).unwrap();
        assert!(solve(&out) == lbool::FALSE, "{} should be unsatisfiable", f);
    }
}

#[test]
fn test_rejected_aigers() {
    match convert_file("test-aig/toggle.aig") {
        Err(Error::UnsupportedFeature { .. }) => (),
        r => panic!("toggle: unexpected result {:?}", r),
    }
    match convert_file("test-aig/halfadder.aig") {
        Err(Error::UnsupportedFeature { .. }) => (),
        r => panic!("halfadder: unexpected result {:?}", r),
    }
    match convert_file("test-aig/truncated.aig") {
        Err(Error::UnexpectedEndOfInput(_)) => (),
        r => panic!("truncated: unexpected result {:?}", r),
    }
    match convert_file("test-aig/corrupt.aig") {
        Err(Error::InvalidGateEncoding { .. }) => (),
        r => panic!("corrupt: unexpected result {:?}", r),
    }
}

#[test]
fn test_rejected_emit_nothing() {
    for f in ["toggle", "halfadder", "truncated", "corrupt"].iter() {
        let input = read_file(&format!("test-aig/{}.aig", f));
        let mut out = Vec::new();
        assert!(aig_to_dimacs(&input[..], &mut out, NoTrace).is_err());
        assert!(out.is_empty(), "{} wrote output", f);
    }
}

/// A generated chain of gates, each AND-ing the previous gate with the next
/// input, encoded with the library's own varint writer.
#[test]
fn test_long_chain() {
    let ninputs: u64 = 300;
    let nands = ninputs - 1;
    let maxvar = ninputs + nands;
    let mut input = format!("aig {} {} 0 1 {}\n{}\n", maxvar, ninputs, nands, 2 * maxvar).into_bytes();
    let mut prev = aig::var_to_lit(1);
    for i in 0..nands {
        let lhs = aig::var_to_lit(ninputs + 1 + i);
        let next_input = aig::var_to_lit(i + 2);
        let (rhs0, rhs1) = if prev > next_input { (prev, next_input) } else { (next_input, prev) };
        aig::push_delta(lhs - rhs0, &mut input).unwrap();
        aig::push_delta(rhs0 - rhs1, &mut input).unwrap();
        prev = lhs;
    }
    let mut out = Vec::new();
    let summary = aig_to_dimacs(&input[..], &mut out, NoTrace).unwrap();
    assert_eq!(summary.clauses, 3 * nands + 2);
    let text = String::from_utf8(out).unwrap();
    let (nvars, nclauses, _) = parse_dimacs(&text);
    assert_eq!(nvars as u64, maxvar + 1);
    assert_eq!(nclauses as u64, summary.clauses);
    assert!(solve(&text) == lbool::TRUE);
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("aigtocnf-{}-{}.cnf", name, process::id()))
}

#[test]
fn test_run_files() {
    let output = temp_path("xor");
    let config = Config {
        input: Some(PathBuf::from("test-aig/xor.aig")),
        output: Some(output.clone()),
        ..Config::default()
    };
    let summary = io::run(&config).unwrap();
    assert_eq!(summary.clauses, 11);
    let written = String::from_utf8(read_file(output.to_str().unwrap())).unwrap();
    let expected = String::from_utf8(read_file("test-aig/xor.cnf")).unwrap();
    assert_eq!(written, expected);
    fs::remove_file(&output).unwrap();
}

#[test]
fn test_run_removes_partial_output() {
    let output = temp_path("partial");
    let config = Config {
        input: Some(PathBuf::from("test-aig/corrupt.aig")),
        output: Some(output.clone()),
        ..Config::default()
    };
    assert!(io::run(&config).is_err());
    assert!(!output.exists());
}

#[test]
fn test_run_missing_input() {
    let config = Config {
        input: Some(PathBuf::from("test-aig/does-not-exist.aig")),
        output: Some(temp_path("missing")),
        ..Config::default()
    };
    match io::run(&config) {
        Err(Error::File { path, .. }) => assert!(path.ends_with("does-not-exist.aig")),
        r => panic!("unexpected result {:?}", r),
    }
}
