use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use fibonacci_cli::{config::Config, driver};
use num_bigint::BigUint;

fn main() -> Result<()> {
    driver::init_tracing();

    let config = Config::from_env();
    let mut out = BufWriter::new(io::stdout().lock());

    driver::run::<BigUint, _>(&config, &mut out).context("writing result to stdout")
}
