// Fixed-width variant: results wrap modulo 2^64 past F(93).
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use fibonacci_cli::{config::Config, driver};

fn main() -> Result<()> {
    driver::init_tracing();

    let config = Config::from_env();
    let mut out = BufWriter::new(io::stdout().lock());

    driver::run::<u64, _>(&config, &mut out).context("writing result to stdout")
}
