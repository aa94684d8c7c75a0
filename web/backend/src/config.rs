use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use textcleanse_core::recorder::DEFAULT_DATABASE_PATH;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "textcleanse-web")]
#[command(about = "HTTP API that cleanses free-form text and single-column CSV uploads")]
pub struct AppConfig {
    /// Address to listen on
    #[arg(long, env = "TEXTCLEANSE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TEXTCLEANSE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Verbose mode - debug level logging for requests and cleansing
    #[arg(short, long, env = "TEXTCLEANSE_VERBOSE")]
    pub verbose: bool,

    /// Directory for spooled uploads (system temp dir by default)
    #[arg(long, env = "TEXTCLEANSE_UPLOAD_DIR", value_name = "DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "TEXTCLEANSE_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Append every cleansing result to the SQLite database
    #[arg(long, env = "TEXTCLEANSE_RECORD_RESULTS")]
    pub record_results: bool,

    /// SQLite database used when recording results
    #[arg(long, env = "TEXTCLEANSE_DATABASE", value_name = "PATH", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,
}

impl AppConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "textcleanse_web=debug,textcleanse_core=debug,tower_http=debug"
        } else {
            "textcleanse_web=info,tower_http=info"
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            verbose: false,
            upload_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            record_results: false,
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}
