//! Report data structures for commands.
//!
//! Commands collect data into reports, then render them to an [`Output`].

mod check;
mod generate;
mod output;

pub use check::{CheckReport, RedactedMember, ShapeCounts};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
