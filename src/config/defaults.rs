pub const DEBUG: bool = false;
pub const VERBOSITY: u8 = 0;

/// Path standing for stdin or stdout.
pub const STDIO_PATH: &str = "-";
