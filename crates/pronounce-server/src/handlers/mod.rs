mod debug;
mod speak;

pub use debug::debug_handler;
pub use speak::{speak_handler, SpeakRequest};
