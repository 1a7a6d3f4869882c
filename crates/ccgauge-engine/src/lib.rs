pub mod factory;
pub mod fallback;
pub mod fmt;
pub mod recommend;
pub mod summary;
pub mod traits;
pub mod types;
pub mod validate;

pub use ccgauge_core::{CcLabel, Objective};
pub use factory::*;
pub use fallback::*;
pub use recommend::*;
pub use summary::*;
pub use traits::*;
pub use types::*;
pub use validate::ValidationError;
