use std::env;

use resmap_core::config::Config;
use resmap_core::traits::{ClickEventHandler, FilterEventHandler};
use resmap_core::types::{FilterState, YearRange};
use resmap_session::MapSession;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {prog} <render|inspect> [args...]");
        eprintln!("  render [variant] [low_year high_year] [pi=<name>|dept=<name>]");
        eprintln!("  inspect [title]");
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;
    let session = MapSession::from_config(&config)?;
    let (cmd, args) = parse_args();

    match cmd.as_str() {
        "render" => {
            let mut state = FilterState::unfiltered(
                config.default_variant()?,
                config.default_year_range(),
            );
            let mut positional = Vec::new();
            for arg in &args {
                if let Some(name) = arg.strip_prefix("pi=") {
                    state.researcher = Some(name.to_string());
                } else if let Some(name) = arg.strip_prefix("dept=") {
                    state.department = Some(name.to_string());
                } else {
                    positional.push(arg.clone());
                }
            }
            if let Some(variant) = positional.first() {
                state.variant = variant.clone();
            }
            if let (Some(lo), Some(hi)) = (positional.get(1), positional.get(2)) {
                state.year_range = YearRange::new(lo.parse()?, hi.parse()?);
            }

            let scene = session.on_filter_changed(&state)?;
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
        "inspect" => {
            let clicked = args.first().and_then(|title| {
                let variant = session.store().default_variant();
                variant.documents.iter().find(|d| d.title == *title)
            });
            if !args.is_empty() && clicked.is_none() {
                eprintln!("No document titled '{}' in the default variant", args[0]);
                std::process::exit(1);
            }
            println!("{}", session.on_point_clicked(clicked).to_text());
        }
        _ => {
            eprintln!("Unknown command: {cmd}");
            std::process::exit(1);
        }
    }
    Ok(())
}
