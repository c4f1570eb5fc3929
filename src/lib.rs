pub mod accumulator;
pub mod cli;
pub mod config;
pub mod error;
pub mod factorial;
pub mod logging;

pub use accumulator::{Accumulator, OverflowPolicy};
pub use config::Settings;
pub use error::{AdderError, AdderResult};
pub use factorial::factorial;
