use std::path::{Path, PathBuf};

use log::LevelFilter;

pub mod defaults;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub debug: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            input: None,
            output: None,
            debug: DEBUG,
            verbosity: VERBOSITY,
        }
    }
}

fn file_path(p: &Option<PathBuf>) -> Option<&Path> {
    match p {
        Some(p) if p.as_os_str() != defaults::STDIO_PATH => Some(p.as_path()),
        _ => None,
    }
}

impl Config {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        file_path(&self.input)
    }

    /// The output file, or `None` for stdout.
    pub fn output_path(&self) -> Option<&Path> {
        file_path(&self.output)
    }

    /// Debug tracing wants everything; otherwise each `-v` opens up a level.
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            return LevelFilter::Trace;
        }
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_stdio() {
        let config = Config {
            input: Some(PathBuf::from("-")),
            output: Some(PathBuf::from("out.cnf")),
            ..Config::default()
        };
        assert_eq!(config.input_path(), None);
        assert_eq!(config.output_path(), Some(Path::new("out.cnf")));
        assert_eq!(Config::default().output_path(), None);
    }

    #[test]
    fn levels() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), LevelFilter::Warn);
        config.verbosity = 1;
        assert_eq!(config.log_level(), LevelFilter::Info);
        config.verbosity = 4;
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.debug = true;
        assert_eq!(config.log_level(), LevelFilter::Trace);
    }
}
