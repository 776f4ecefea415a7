//! Decode results

/// Payload and segment results
pub mod payload;

pub use payload::{DecodedPayload, SegmentInfo};
