//! Command implementations for rove

pub mod run;

use crate::cli::Cli;
use rove_core::error::Result;
use std::time::Instant;

pub fn dispatch(cli: &Cli, start: Instant) -> Result<()> {
    run::run(cli, start)
}
