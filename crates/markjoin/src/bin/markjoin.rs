//! Markjoin CLI
//!
//! Usage:
//!   markjoin                                  # data.csv + data_from_ipad.csv -> report.csv
//!   markjoin -c configs/markjoin.yaml
//!   markjoin --lower 30 --upper 5 -o out.csv
//!   markjoin --dry-run

use anyhow::Context;
use markjoin::{JoinArgs, JoinConfig};

fn main() -> anyhow::Result<()> {
    let args: JoinArgs = argh::from_env();

    let env = env_logger::Env::default().default_filter_or(args.log_level.as_str());
    env_logger::init_from_env(env);

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            JoinConfig::load(path)?
        }
        None => JoinConfig::default(),
    };
    args.apply(&mut config);
    log::info!(
        "Window: -{}s/+{}s, strategy: {:?}, on parse error: {:?}",
        config.window.lower_secs,
        config.window.upper_secs,
        config.strategy,
        config.on_parse_error
    );

    let summary = markjoin::run(&config, args.dry_run).context("Report run failed")?;

    if args.dry_run {
        println!("{}", summary);
    }
    Ok(())
}
