use clap::Parser;

use hashposter_cli::{run, Args};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let line = run(&args)?;
    println!("{}", line);
    Ok(())
}
