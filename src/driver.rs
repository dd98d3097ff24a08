use std::io::{self, Write};

use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::config::Config;
use crate::fibonacci::repeat_compute;
use crate::term::Term;

/// Installs the stderr log subscriber. Level comes from `RUST_LOG`, `warn` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Computes `F(config.index)` in `T`, `config.repeat` times, and writes the last result
/// as a decimal line to `out`.
pub fn run<T: Term, W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    debug!(
        index = config.index,
        repeat = config.repeat,
        term = std::any::type_name::<T>(),
        "computing"
    );
    let result: T = repeat_compute(config.index, config.repeat);
    writeln!(out, "{result}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn output<T: Term>(index: u64, repeat: u64) -> String {
        let mut out = Vec::new();
        run::<T, _>(&Config { index, repeat }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_config_prints_sixtieth_term() {
        let mut out = Vec::new();
        run::<BigUint, _>(&Config::default(), &mut out).unwrap();
        assert_eq!(out, b"1548008755920\n");
    }

    #[test]
    fn prints_single_decimal_line() {
        assert_eq!(output::<BigUint>(100, 1), "354224848179261915075\n");
        assert_eq!(output::<u64>(100, 1), "3736710778780434371\n");
        assert_eq!(output::<u64>(1, 1), "1\n");
    }

    #[test]
    fn repeat_does_not_change_output() {
        assert_eq!(output::<BigUint>(80, 5), output::<BigUint>(80, 1));
        assert_eq!(output::<u64>(80, 5), output::<u64>(80, 1));
    }
}
