//! Tracing setup for the CLI.
//!
//! The filter comes from `DOWNLEVEL_LOG`, falling back to `RUST_LOG`, with
//! the usual `RUST_LOG` syntax (`debug`, `dl_desugar=trace`, ...). Without
//! either, `-v` picks the level: none → warn, `-v` → info, `-vv` → debug,
//! `-vvv` → trace. Output goes to stderr so it never mixes with emitted code.

use tracing_subscriber::EnvFilter;

fn build_filter(verbose: u8) -> EnvFilter {
    if let Ok(val) = std::env::var("DOWNLEVEL_LOG") {
        return EnvFilter::builder().parse_lossy(val);
    }
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(default_level(verbose))
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }
}
