// Command line interface
// Flags override every other configuration source

use clap::Parser;

#[derive(Debug, Parser, Default, Clone, PartialEq, Eq)]
#[command(name = "clean-url-server")]
#[command(about = "Static file server with clean URLs and inline PDFs", long_about = None)]
pub struct Cli {
    /// Port to serve on (default: 8000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Interface to bind (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Directory to serve (default: current directory)
    #[arg(short, long)]
    pub root: Option<String>,

    /// Configuration file, without or with extension
    #[arg(short, long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        let cli = Cli::try_parse_from(["clean-url-server", "--port", "8001"]).unwrap();
        assert_eq!(cli.port, Some(8001));
        assert_eq!(cli.root, None);

        let cli = Cli::try_parse_from(["clean-url-server", "-p", "9000", "-r", "site"]).unwrap();
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.root.as_deref(), Some("site"));
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["clean-url-server"]).unwrap();
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["clean-url-server", "--port", "http"]).is_err());
        assert!(Cli::try_parse_from(["clean-url-server", "--port", "70000"]).is_err());
    }
}
