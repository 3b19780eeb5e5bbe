use chrono::Utc;
use guess::build_info;
use guess::cli::{self, CliAction, CliOptions};
use guess::game::GameConfig;
use guess::random::{RandomSource, RngSource};
use guess::session::{choose_difficulty, Session};
use log::{debug, error};
use std::env;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let options = match cli::parse_args(&args) {
        Ok(CliAction::Play(options)) => options,
        Ok(CliAction::Help) => {
            println!("{}", cli::help_message());
            return;
        }
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            return;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Run 'guess --help' for usage.");
            process::exit(2);
        }
    };

    let preset = match options.resolve_config() {
        Ok(preset) => preset,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(&options, preset) {
        error!("session failed: {}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(options: &CliOptions, preset: Option<GameConfig>) -> io::Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let config = match preset {
        Some(config) => config,
        None => GameConfig::from_difficulty(choose_difficulty(&mut input, &mut output)?),
    };
    debug!("starting session with {:?}", config);

    let random: Box<dyn RandomSource> = match options.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::system()),
    };

    let stats = Session::new(config, random, input, &mut output).run()?;

    if options.json {
        let summary = stats.summary_at(Utc::now());
        let json = serde_json::to_string_pretty(&summary).map_err(io::Error::other)?;
        writeln!(output, "{}", json)?;
    }
    Ok(())
}
