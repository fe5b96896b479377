// src/bin/cli.rs
use sickos_league::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()
}
