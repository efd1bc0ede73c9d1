use std::path::PathBuf;

use pronounce_acquire::{DEFAULT_DICTIONARY_URL, DEFAULT_USER_AGENT};

/// Runtime settings for the server, taken from the command line.
#[derive(Debug, Clone, clap::Args)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Directory of static assets served at the root path
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,

    /// ffmpeg executable used to merge clips
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,

    /// Dictionary entry URL; the word is appended as a path segment
    #[arg(long, default_value = DEFAULT_DICTIONARY_URL)]
    pub dictionary_url: String,

    /// User-Agent sent to the dictionary and audio hosts
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Parent directory for per-request scratch directories (default: system temp dir)
    #[arg(long)]
    pub work_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            ffmpeg: PathBuf::from("ffmpeg"),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            work_dir: None,
        }
    }
}
