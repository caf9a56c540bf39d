use anyhow::Result;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;
use std::process;
use trel::cli::print_help;
use trel::client::Client;
use trel::config::Config;
use trel::controller;
use trel::paths::AppPaths;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut debug = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" | "help" => {
                print_help();
                return Ok(());
            }
            "-d" | "--debug" => debug = true,
            "-c" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    usage();
                };
                config_path = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => usage(),
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    if positional.is_empty() || positional.len() > 2 {
        usage();
    }
    let title = positional[0].as_str();
    let desc = positional.get(1).map(String::as_str).unwrap_or("");

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let path = match config_path {
        Some(p) => p,
        None => AppPaths::get_config_file_path()?,
    };
    log::debug!("reading config from {}", path.display());
    let config = Config::load(&path)?;

    let client = Client::new(&config.key, &config.token);
    controller::add_task(&client, &config, title, desc).await?;

    Ok(())
}

fn usage() -> ! {
    eprintln!("usage: t [options] <title> [description]");
    eprintln!("       t --help");
    process::exit(2);
}
