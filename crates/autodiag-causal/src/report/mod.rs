//! Turning isolation results into something an operator can read.

pub mod dot;
pub mod graph_view;

use autodiag_core::models::FaultPath;

pub use dot::to_dot;
pub use graph_view::{labelled_view, preview_view};

/// One line per path, root cause first: `[C1, C2, C3]` renders as `C3 -> C2 -> C1`.
pub fn render(fault_paths: &[FaultPath]) -> Vec<String> {
    fault_paths.iter().map(FaultPath::render).collect()
}
