/// Work counters collected during a search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of nodes visited, leaves included
    pub nodes: usize,
    /// Number of evals computed
    pub evaluations: usize,
    /// Number of sibling lists cut short by the alpha-beta window
    pub cutoffs: usize,
}
