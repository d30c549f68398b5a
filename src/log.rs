//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these are the `tracing` macros.
//! Without it they expand to nothing, so documents render with no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __svgdoc_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __svgdoc_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__svgdoc_debug as debug, __svgdoc_warn as warn};
