use clap::Parser;

pub const DEFAULT_PORT: u16 = 7860;

#[derive(Parser, Debug, Clone)]
#[command(name = "screener")]
#[command(author, version, about = "Resume screening demo server returning a mock analysis")]
pub struct Cli {
    /// Listen on all interfaces so other machines on the network can reach the demo
    #[arg(long)]
    pub share: bool,

    /// Port for the local HTTP server
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["screener"]);
        assert!(!cli.share);
        assert_eq!(cli.port, 7860);
    }

    #[test]
    fn test_share_and_port() {
        let cli = Cli::parse_from(["screener", "--share", "--port", "9000"]);
        assert!(cli.share);
        assert_eq!(cli.port, 9000);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["screener", "--port", "not-a-port"]).is_err());
        assert!(Cli::try_parse_from(["screener", "--port", "70000"]).is_err());
    }
}
