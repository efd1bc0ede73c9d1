//! HTTP front end: the `/speak` pipeline, the page debug endpoint and
//! static assets.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod speak;
pub mod state;

pub use config::ServerConfig;
pub use error::SpeakError;
pub use router::create_router;
pub use speak::{MergedAudio, SpeakService};
pub use state::AppState;
