use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use aigtocnf::config::Config;
use aigtocnf::io;

fn cli() -> Command {
    Command::new("aigtocnf")
        .about("Translates a combinational binary AIGER circuit with a single output into DIMACS CNF")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("input")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .help("Binary AIGER file to read, '-' or nothing for stdin."))

        .arg(Arg::new("output")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .help("File to write the formula to, '-' or nothing for stdout.")
            .long_help("File to write the formula to, '-' or nothing for stdout.

If the conversion fails the file is removed again, as any clauses written before the failure do not form a valid formula."))

        .arg(Arg::new("debug")
            .short('d')
            .long("debug")
            .action(ArgAction::SetTrue)
            .help("Trace every byte read and every AND gate decoded to stderr."))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Report progress to stderr. Repeat for more detail."))
}

fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("input") {
        the_config.input = Some(path.clone())
    };

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("output") {
        the_config.output = Some(path.clone())
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("debug") {
        the_config.debug = *value
    };

    if let Ok(Some(count)) = args.try_get_one::<u8>("verbose") {
        the_config.verbosity = *count
    };

    the_config
}

fn main() {
    let matches = cli().get_matches();
    let config = config_from_args(&matches);

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    match io::run(&config) {
        Ok(summary) => log::info!("wrote {} clauses over {} variables", summary.clauses, summary.header.num_vars()),
        Err(e) => {
            eprintln!("*** [aigtocnf] {}", e);
            process::exit(1);
        }
    }
}
