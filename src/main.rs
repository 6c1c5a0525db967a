use clap::Parser;

mod cli;
mod fetch;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    cli::Cli::parse().execute()
}
