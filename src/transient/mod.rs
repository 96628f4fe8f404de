//! One-time structures.
//!
//! Structures whose contents are consumed shortly after being written, and which are cleared (though not freed) between uses.

mod staging_buffer;
pub use staging_buffer::StagingBuffer;
