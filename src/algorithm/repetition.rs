//! Local repair of (operand, operator) repeats inside a trailing window
//!
//! A single left-to-right pass. At each position the trailing window is
//! scanned; on the first duplicate found, the first later problem that
//! duplicates nothing in that window is swapped in. The pass never
//! backtracks, so a swap may push a conflict further down the sequence
//! where it is caught again or left in place.

use crate::algorithm::operators::Problem;

/// Outcome counters for one enforcement pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Positions at which a duplicate was found in the window
    pub conflicts_detected: usize,
    /// Conflicts repaired by swapping in a later problem
    pub swaps_performed: usize,
    /// Conflicts for which no later problem fit the window
    pub unresolved: usize,
}

/// Start index of the window trailing `position`
const fn window_start(position: usize, window: usize) -> usize {
    position.saturating_sub(window)
}

/// Problems in the trailing window of `position`
fn trailing_window(problems: &[Problem], position: usize, window: usize) -> &[Problem] {
    problems
        .get(window_start(position, window)..position)
        .unwrap_or_default()
}

/// Find the first position after `position` whose problem appears nowhere in `window`
fn first_fit_after(problems: &[Problem], position: usize, window: &[Problem]) -> Option<usize> {
    problems
        .iter()
        .enumerate()
        .skip(position + 1)
        .find(|(_, candidate)| !window.contains(candidate))
        .map(|(index, _)| index)
}

/// Repair window repeats in place and report what happened
///
/// A `window` of zero disables all checks.
pub fn enforce_repetition_window(problems: &mut [Problem], window: usize) -> RepairReport {
    let mut report = RepairReport::default();
    if window == 0 {
        return report;
    }

    for i in 0..problems.len() {
        let Some(&current) = problems.get(i) else {
            break;
        };
        let recent = trailing_window(problems, i, window);

        // Only the first conflict is handled; the window is not re-scanned after a swap
        if !recent.contains(&current) {
            continue;
        }
        report.conflicts_detected += 1;

        match first_fit_after(problems, i, recent) {
            Some(k) => {
                problems.swap(i, k);
                report.swaps_performed += 1;
            }
            None => report.unresolved += 1,
        }
    }

    report
}

/// Count positions whose problem repeats one in its trailing window
pub fn count_window_conflicts(problems: &[Problem], window: usize) -> usize {
    if window == 0 {
        return 0;
    }

    problems
        .iter()
        .enumerate()
        .filter(|&(i, problem)| trailing_window(problems, i, window).contains(problem))
        .count()
}
