use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use env_logger::Env;
use intersection_config::{
    ConfigError, ConfigParser, Controller, DocumentFormat, IntersectionLoader, LoaderConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("intersection-check")
        .version(clap::crate_version!())
        .about("Load and validate a signalized intersection configuration")
        .arg(
            Arg::new("config")
                .value_name("CONFIG")
                .help("Intersection configuration file (JSON or YAML)")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Document format, detected from the extension when omitted")
                .value_parser(["json", "yaml"]),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .value_name("BYTES")
                .help("Maximum document size in bytes")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .help("Print the validated configuration as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let default_filter = match matches.get_count("verbose") {
        0 => "off",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ConfigError>() {
                Some(config_error) => eprintln!("error[{}]: {}", config_error.code(), config_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<PathBuf>("config")
        .context("missing configuration path")?;

    let mut loader_config = LoaderConfig::default();
    if let Some(format) = matches.get_one::<String>("format") {
        let format = format
            .parse::<DocumentFormat>()
            .map_err(anyhow::Error::msg)?;
        loader_config = loader_config.with_format(format);
    }
    if let Some(bytes) = matches.get_one::<u64>("max-size") {
        loader_config = loader_config.with_max_document_size(*bytes);
    }

    let loader = IntersectionLoader::new(loader_config)?;
    let validated = loader.load_file(path)?;

    if matches.get_flag("dump") {
        println!("{}", ConfigParser::to_json(&validated)?);
    }

    let mut controller = Controller::new(validated);
    controller.init()?;

    // Phase timing is not implemented yet; a validated, initialized
    // controller is the end of the run.
    Ok(())
}
