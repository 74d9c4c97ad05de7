//! `qsync config` – show config path and effective values.

use anyhow::Result;
use qsync_core::config::{self, QsyncConfig};

pub fn run_config(cfg: &QsyncConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
