//! Submission Adapters
//!
//! Implementations of the SubmissionSink port.

mod simulated_sink;

pub use simulated_sink::SimulatedSubmissionSink;
