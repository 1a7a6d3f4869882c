pub mod composition;
pub mod error;
pub mod metrics;

pub use composition::*;
pub use error::MetricsError;
pub use metrics::*;
