//! Prometheus metrics for the SPOC client provider
//!
//! Counters and histograms for lifecycle operations and remote calls. The
//! embedding host decides how to expose them; `render` produces the text
//! exposition format.

mod prometheus;

pub use self::prometheus::*;
