//! Which pipeline step is active, and the transitions between steps.

pub mod context;

pub use context::{ActiveStep, StepContext, StepSwitch};
