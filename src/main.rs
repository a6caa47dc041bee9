use hero_battle::{run, CliOptions};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--roster roster.json] [--seed SEED] [--find melee|caster|marksman]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--roster" => {
                let path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--roster requires a path (e.g. --roster roster.json)")
                })?;
                opts.roster_path = Some(path);
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                opts.seed = Some(val.parse()?);
            }
            "--find" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--find requires an archetype"))?;
                opts.find = val.parse()?;
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hero_battle=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args()?;
    run(opts)
}
