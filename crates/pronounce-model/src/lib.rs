pub mod candidate;
pub mod clip;
pub mod media;
pub mod mode;

pub use candidate::*;
pub use clip::*;
pub use media::*;
pub use mode::*;
