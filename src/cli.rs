use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use clap::ValueHint;
use regex::Regex;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File with exposition text
    ///
    /// The metrics text to document. Use "-" to read from stdin. Ignored when an endpoint is given.
    #[arg(value_hint=ValueHint::FilePath, default_value="-")]
    pub input: PathBuf,

    /// Prometheus endpoint to scrape
    ///
    /// Read the metrics text from this endpoint instead of the input file.
    #[arg(short, long, env="PROM_ENDPOINT", value_hint=ValueHint::Url)]
    pub endpoint: Option<String>,

    /// Prometheus endpoint's port number
    ///
    /// Replaces the port number in the endpoint. Example: http://localhost:<PORT>/metrics
    /// Ignored when no endpoint is given.
    #[arg(short, long, env="PROM_PORT", value_hint=ValueHint::Other)]
    pub port: Option<u16>,

    /// Write the markdown to this file
    ///
    /// The document is written to stdout when no output file is given.
    #[arg(short, long, env="PROMDOC_OUTPUT", value_hint=ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Leave out the raw source blocks
    #[arg(long)]
    pub no_raw: bool,

    /// Set the logging level
    ///
    /// Log records are written to stderr, and to the log file when one is given.
    #[arg(short, long, env="LOG_LEVEL", value_hint=ValueHint::Other, default_value="WARN")]
    pub loglevel: log::LevelFilter,

    /// Also log to this file
    #[arg(long, env="PROMDOC_LOG_FILE", value_hint=ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The endpoint to scrape, with the port replaced when one was given.
    pub fn endpoint(&self) -> Option<String> {
        let endpoint = self.endpoint.as_deref()?;
        Some(match self.port {
            Some(port) => with_port(endpoint, port),
            None => endpoint.to_string(),
        })
    }
}

fn port_regex() -> &'static Regex {
    static PORT_RE: OnceLock<Regex> = OnceLock::new();
    PORT_RE.get_or_init(|| Regex::new(":(\\d{2,5})/").expect("port pattern to compile"))
}

fn with_port(endpoint: &str, port: u16) -> String {
    let regex = port_regex();
    if !regex.is_match(endpoint) {
        log::warn!("No port found in {endpoint}, ignoring port {port}");
    }
    regex
        .replace(endpoint, format!(":{port}/", port = port))
        .to_string()
}
