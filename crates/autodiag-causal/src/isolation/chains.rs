//! Symptom-to-root chains within a branching fault path.

use std::collections::HashSet;

use autodiag_core::models::FaultPath;

use super::links::ExplicitlyConsideredLinks;

/// Every chain from the path's seed to a component with no further anomalous cause.
///
/// Consecutive components of each chain are a real affecting edge. A path without branches
/// yields exactly one chain equal to itself.
pub fn fault_chains(path: &FaultPath, links: &ExplicitlyConsideredLinks) -> Vec<FaultPath> {
    let Some(seed) = path.seed() else {
        return Vec::new();
    };
    let on_path: HashSet<&str> = path.components().iter().map(String::as_str).collect();

    let mut chains = Vec::new();
    let mut stack: Vec<Vec<&str>> = vec![vec![seed]];
    while let Some(chain) = stack.pop() {
        let Some(&last) = chain.last() else {
            continue;
        };
        let next: Vec<&str> = links
            .affecting(last)
            .iter()
            .map(String::as_str)
            .filter(|a| on_path.contains(a) && !chain.contains(a))
            .collect();
        if next.is_empty() {
            chains.push(FaultPath::from_components(
                chain.iter().map(|c| c.to_string()).collect(),
            ));
            continue;
        }
        // Reverse so the first affecting component is explored first.
        for a in next.into_iter().rev() {
            let mut extended = chain.clone();
            extended.push(a);
            stack.push(extended);
        }
    }
    chains
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(pairs: &[(&str, &[&str])]) -> ExplicitlyConsideredLinks {
        let mut links = ExplicitlyConsideredLinks::new();
        for (c, a) in pairs {
            links.record(c, a.iter().map(|s| s.to_string()).collect());
        }
        links
    }

    fn path(components: &[&str]) -> FaultPath {
        FaultPath::from_components(components.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn linear_path_is_its_own_chain() {
        let p = path(&["C1", "C2", "C3"]);
        let l = links(&[("C1", &["C2"]), ("C2", &["C3", "X"]), ("C3", &[])]);
        assert_eq!(fault_chains(&p, &l), vec![p]);
    }

    #[test]
    fn branching_root_yields_one_chain_per_root() {
        let p = path(&["A", "B", "R1", "R2"]);
        let l = links(&[("A", &["B"]), ("B", &["R1", "R2"]), ("R1", &[]), ("R2", &[])]);
        let rendered: Vec<String> = fault_chains(&p, &l).iter().map(FaultPath::render).collect();
        assert_eq!(rendered, vec!["R1 -> B -> A", "R2 -> B -> A"]);
    }

    #[test]
    fn cycle_on_path_terminates() {
        let p = path(&["A", "B"]);
        let l = links(&[("A", &["B"]), ("B", &["A"])]);
        let chains = fault_chains(&p, &l);
        assert_eq!(chains, vec![path(&["A", "B"])]);
    }
}
