//! Dimension resolution
//!
//! Every widget owns a [`Dimensions`] resolver built from its immutable
//! [`Pattern`]. Positions are resolved once and memoized until explicitly
//! invalidated or pinned by a drag; sizes are recomputed on every read
//! because the parent's extent may change underneath them.

mod length;
mod pattern;
mod dimensions;

pub use length::Length;
pub use pattern::{Pattern, DEFAULT_BLUR_RADIUS};
pub use dimensions::{Accumulation, Dimensions, Resolved};
