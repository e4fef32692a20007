//! src/net.rs
//!
//! Sample producers: the interface sampler thread and the TCP feed.

pub mod remote;
pub mod sampler;
