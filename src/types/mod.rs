//! Data types for sticker jobs and page geometry.

mod job;
mod page;

pub use job::*;
pub use page::*;
