//! Filter

use crate::task::{FilterMode, Task};

/// Project the subsequence of `tasks` matching `mode`, in original order
///
/// Pure and O(n); safe to recompute on every render.
pub fn project(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|task| mode.matches(task)).collect()
}

/// Project matching tasks paired with their position in the full sequence
///
/// Views must address mutations by the position in the full sequence, not
/// the position within the filtered rendering. Reusing the filtered position
/// is a correctness bug as soon as any task is hidden by the filter, so each
/// projected item carries its source index explicitly.
pub fn project_indexed(tasks: &[Task], mode: FilterMode) -> Vec<(usize, &Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| mode.matches(task))
        .collect()
}
