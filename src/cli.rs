//! The single `--port` flag, parsed once in `main` before the listener binds.

use clap::Parser;

const DEFAULT_PORT: u16 = 7001;

#[derive(Debug, Parser)]
#[command(name = "recurrence-analyzer", about = "Infers algorithmic recurrences from C source.")]
pub struct Args {
    /// Port the HTTP service listens on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_7001_when_flag_absent() {
        let args = Args::parse_from(["recurrence-analyzer"]);
        assert_eq!(args.port, 7001);
    }

    #[test]
    fn accepts_explicit_port() {
        let args = Args::parse_from(["recurrence-analyzer", "--port", "9090"]);
        assert_eq!(args.port, 9090);
    }
}
