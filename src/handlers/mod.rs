pub mod convert;
pub mod text;
pub mod tts;

pub use convert::*;
pub use text::*;
pub use tts::*;
