use anyhow::Result;
use qmltags::cli::{Cli, Commands, GenerateArgs};
use qmltags::config::{Config, CONFIG_FILE_NAME};
use qmltags::engine::{self, watch::WatchTarget};

use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.generate.verbose);

    match cli.command {
        None => generate(cli.generate)?,
        Some(Commands::Init) => {
            let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            if path.exists() {
                eprintln!("{CONFIG_FILE_NAME} already exists");
                std::process::exit(1);
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created {CONFIG_FILE_NAME}");
        }
        Some(Commands::Kinds) => {
            println!("{}", qmltags::cli::kinds::list_kinds());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn generate(args: GenerateArgs) -> Result<()> {
    let root = Path::new(".");
    let mut cfg = Config::load(args.config.as_deref(), root)?;
    if args.no_methods {
        cfg.extractors.methods = false;
    }
    if args.no_properties {
        cfg.extractors.properties = false;
    }
    let output = args.output_filepath.unwrap_or_else(|| cfg.output.clone());
    let format = args.format.unwrap_or(cfg.format);

    let paths = engine::collect_paths(&args.filepaths, root, &cfg);
    let set = engine::generate(&paths, &output, &cfg)?;
    qmltags::cli::output::render(&set, &output, format);

    if args.watch {
        let target = WatchTarget::new(args.filepaths, root.to_path_buf(), output.clone(), &cfg);
        engine::watch::watch(&target, &cfg, |set| {
            qmltags::cli::output::render(set, &output, format)
        })?;
    }

    Ok(())
}
