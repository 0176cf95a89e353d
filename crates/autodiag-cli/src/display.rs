//! Terminal presentation, with optional DOT files for the causal graphs.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use autodiag_causal::to_dot;
use autodiag_core::errors::{DiagError, DiagResult};
use autodiag_core::models::{CausalGraphView, ClassificationArtifact, GraphPhase, LinkStatus};
use autodiag_core::traits::IPresentation;

pub struct TerminalPresentation<W> {
    out: Mutex<W>,
    dot_dir: Option<PathBuf>,
}

impl<W: Write> TerminalPresentation<W> {
    pub fn new(out: W, dot_dir: Option<PathBuf>) -> Self {
        Self {
            out: Mutex::new(out),
            dot_dir,
        }
    }

    fn write(&self, text: &str) -> DiagResult<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{text}").map_err(failed)
    }
}

fn failed(e: impl std::fmt::Display) -> DiagError {
    DiagError::PresentationFailed {
        reason: e.to_string(),
    }
}

fn phase_name(phase: GraphPhase) -> &'static str {
    match phase {
        GraphPhase::Preview => "preview",
        GraphPhase::Isolated => "isolated",
    }
}

impl<W: Write + Send> IPresentation for TerminalPresentation<W> {
    fn show_fault_paths(&self, paths: &[String]) -> DiagResult<()> {
        if paths.is_empty() {
            return self.write("no fault paths isolated");
        }
        let mut text = String::from("isolated fault paths (root cause first):");
        for path in paths {
            text.push_str("\n  ");
            text.push_str(path);
        }
        self.write(&text)
    }

    fn show_causal_graph(&self, view: &CausalGraphView, phase: GraphPhase) -> DiagResult<()> {
        let count = |s| view.edges_with(s).count();
        self.write(&format!(
            "causal graph for {} ({}): {} fault path, {} non-anomalous, {} disregarded links",
            view.seed,
            phase_name(phase),
            count(LinkStatus::FaultPath),
            count(LinkStatus::NonAnomalous),
            count(LinkStatus::Disregarded),
        ))?;
        if let Some(dir) = &self.dot_dir {
            fs::create_dir_all(dir).map_err(failed)?;
            let path = dir.join(format!("{}_{}.dot", view.seed, phase_name(phase)));
            fs::write(&path, to_dot(view)).map_err(failed)?;
            self.write(&format!("  written to {}", path.display()))?;
        }
        Ok(())
    }

    fn show_classification_artifact(&self, artifact: &ClassificationArtifact) -> DiagResult<()> {
        let verdict = if artifact.anomaly { "ANOMALY" } else { "NO ANOMALY" };
        let score = artifact
            .score
            .map(|s| format!(" - SCORE: {s:.4}"))
            .unwrap_or_default();
        self.write(&format!("{}: [{verdict}{score}] ({})", artifact.component, artifact.method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodiag_core::models::{ClassificationMethod, GraphEdgeView};

    fn output(p: TerminalPresentation<Vec<u8>>) -> String {
        String::from_utf8(p.out.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn paths_listed_one_per_line() {
        let p = TerminalPresentation::new(Vec::new(), None);
        p.show_fault_paths(&["C2 -> C1".into(), "C4 -> C3".into()]).unwrap();
        let text = output(p);
        assert!(text.contains("\n  C2 -> C1\n  C4 -> C3"));
    }

    #[test]
    fn artifact_shows_score() {
        let p = TerminalPresentation::new(Vec::new(), None);
        p.show_classification_artifact(&ClassificationArtifact {
            component: "C1".into(),
            anomaly: true,
            method: ClassificationMethod::Model,
            score: Some(0.125),
            normalized_input: vec![],
        })
        .unwrap();
        assert!(output(p).contains("C1: [ANOMALY - SCORE: 0.1250]"));
    }

    #[test]
    fn graphs_written_as_dot() {
        let dir = tempfile::tempdir().unwrap();
        let p = TerminalPresentation::new(Vec::new(), Some(dir.path().to_path_buf()));
        let view = CausalGraphView {
            seed: "S".into(),
            edges: vec![GraphEdgeView {
                affected: "S".into(),
                affecting: "A".into(),
                status: LinkStatus::FaultPath,
            }],
        };
        p.show_causal_graph(&view, GraphPhase::Isolated).unwrap();
        let dot = fs::read_to_string(dir.path().join("S_isolated.dot")).unwrap();
        assert!(dot.contains("color=red"));
    }
}
