mod collection;
#[cfg(feature = "debug-tools")]
mod dump;

pub use collection::*;
#[cfg(feature = "debug-tools")]
pub use dump::*;
