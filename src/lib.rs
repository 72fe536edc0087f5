pub mod adapters;
pub mod assertions;
pub mod compare;
pub mod render;
pub mod runner;

pub use adapters::{Queue, Stack};
pub use assertions::AssertionError;
pub use render::{render_adapter, render_map, render_sequence, DebugView, Render};
pub use runner::reporter::{JsonReporter, OutputFormat, Reporter, TextReporter};
pub use runner::{TestCase, TestFilter, TestHarness};
