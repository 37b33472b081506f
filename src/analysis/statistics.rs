//! Operand frequency tally for diagnostic display

use crate::algorithm::distribution::OperandRange;
use crate::algorithm::operators::Problem;
use std::collections::BTreeMap;
use std::fmt;

/// Count of each operand value over an inclusive range
///
/// Only observed values are stored, so memory grows with the number of
/// distinct operands rather than with the width of the range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTally {
    range: OperandRange,
    counts: BTreeMap<i32, usize>,
    /// Operands that fell outside the range
    pub out_of_range: usize,
}

impl FrequencyTally {
    /// Tally operand values of a problem sequence
    pub fn from_problems(problems: &[Problem], range: OperandRange) -> Self {
        Self::from_operands(problems.iter().map(|problem| problem.operand), range)
    }

    /// Tally raw operand values
    pub fn from_operands(operands: impl IntoIterator<Item = i32>, range: OperandRange) -> Self {
        let mut counts = BTreeMap::new();
        let mut out_of_range = 0;

        for operand in operands {
            if range.contains(operand) {
                *counts.entry(operand).or_insert(0) += 1;
            } else {
                out_of_range += 1;
            }
        }

        Self {
            range,
            counts,
            out_of_range,
        }
    }

    /// Range the tally covers
    pub const fn range(&self) -> OperandRange {
        self.range
    }

    /// Occurrences of `value`, zero outside the range
    pub fn count(&self, value: i32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// `(value, count)` pairs for every value in the range, ascending
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.range.values().map(|value| (value, self.count(value)))
    }

    /// `(value, count)` pairs for values that occurred at least once, ascending
    pub fn observed(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Sum of all in-range counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Smallest and largest per-value counts
    pub fn spread(&self) -> (usize, usize) {
        let max = self.counts.values().copied().max().unwrap_or(0);
        let min = if self.counts.len() < self.range.size() {
            0
        } else {
            self.counts.values().copied().min().unwrap_or(0)
        };
        (min, max)
    }
}

impl fmt::Display for FrequencyTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, max) = self.spread();
        let value_width = self
            .range
            .min()
            .to_string()
            .len()
            .max(self.range.max().to_string().len());
        let count_width = max.to_string().len();

        for (value, count) in self.iter() {
            writeln!(
                f,
                "{value:>value_width$} | {count:>count_width$} {}",
                "#".repeat(count)
            )?;
        }
        Ok(())
    }
}
