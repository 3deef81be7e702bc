use anyhow::Result;
use checkfile::{Config, checker};

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;
    config.init_logging();

    checker::run()?;

    Ok(())
}
