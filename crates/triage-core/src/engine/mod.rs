mod runner;

pub use runner::{CancelFlag, Engine};
