use clap::Parser;
use env_logger::Env;

mod cli;
mod config;
mod render;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;

    // Shared state is not thread-safe
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cli::run(args.command, cfg))
}
