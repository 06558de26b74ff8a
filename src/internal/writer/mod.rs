pub mod flags;
pub mod sink;
pub mod writer;

pub use flags::{FlagError, Flags};
pub use sink::{MemorySink, Sink};
pub use writer::Writer;
