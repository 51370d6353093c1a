use clap::{Arg, ArgAction, Command};
use fatigue_reliability::app_logic::{self, RunOptions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("fatigue-reliability")
        .version("0.1.0")
        .about("Fatigue life and Weibull reliability prediction for variable amplitude load spectra")
        .arg(
            Arg::new("run")
                .short('r')
                .long("run")
                .value_name("CONFIG")
                .help("Path to the YAML or TOML analysis configuration")
                .required(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON regardless of the configured output"),
        )
        .arg(
            Arg::new("samples")
                .short('n')
                .long("samples")
                .value_parser(clap::value_parser!(usize))
                .help("Override the number of Monte Carlo trials"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .help("Seed the Monte Carlo generator for reproducible runs"),
        )
        .after_help("Set RUST_LOG=debug to trace every load block evaluation.")
        .get_matches();

    let options = RunOptions {
        json: matches.get_flag("json"),
        samples: matches.get_one::<usize>("samples").copied(),
        seed: matches.get_one::<u64>("seed").copied(),
    };
    if let Some(config_path) = matches.get_one::<String>("run") {
        let report = app_logic::run(config_path, &options)?;
        println!("{}", report);
    }
    Ok(())
}
