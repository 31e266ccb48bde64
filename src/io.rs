use std::fs;
use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::aigtocnf::{aig_to_dimacs, Summary};
use crate::config::Config;
use crate::err::{Error, Result};
use crate::trace::{targets, LogTrace, NoTrace};

fn file_reader(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) => Err(Error::File {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn file_writer(path: &Path) -> Result<BufWriter<File>> {
    match File::create(path) {
        Ok(f) => Ok(BufWriter::new(f)),
        Err(e) => Err(Error::File {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn convert<R: Read, W: Write>(config: &Config, r: R, w: &mut W) -> Result<Summary> {
    let summary = if config.debug {
        aig_to_dimacs(r, w, LogTrace)?
    } else {
        aig_to_dimacs(r, w, NoTrace)?
    };
    w.flush()?;
    Ok(summary)
}

fn convert_to<R: Read>(config: &Config, r: R) -> Result<Summary> {
    match config.output_path() {
        Some(path) => {
            let mut w = file_writer(path)?;
            let result = convert(config, r, &mut w);
            if result.is_err() {
                // Whatever made it to the file is not a valid formula.
                drop(w);
                if let Err(e) = fs::remove_file(path) {
                    log::warn!(target: targets::EMIT, "could not remove {}: {}", path.display(), e);
                }
            }
            result
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            convert(config, r, &mut w)
        }
    }
}

/// Runs one conversion between the streams named by `config`.
pub fn run(config: &Config) -> Result<Summary> {
    match config.input_path() {
        Some(path) => {
            log::info!(target: targets::EMIT, "reading {}", path.display());
            convert_to(config, file_reader(path)?)
        }
        None => {
            let stdin = io::stdin();
            let r = BufReader::new(stdin.lock());
            convert_to(config, r)
        }
    }
}
