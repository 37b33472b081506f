//! Even allocation of operand values across an inclusive range

use std::fmt;

/// Inclusive operand range whose bounds are always ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandRange {
    min: i32,
    max: i32,
}

impl OperandRange {
    /// Create a range from two bounds given in either order
    pub const fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Smallest operand value
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Largest operand value
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of distinct values in the range, at least one
    pub const fn size(self) -> usize {
        (self.max as i64 - self.min as i64 + 1) as usize
    }

    /// Check whether a value lies inside the range
    pub const fn contains(self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Position of a value relative to the lower bound
    pub const fn offset_of(self, value: i32) -> Option<usize> {
        if self.contains(value) {
            Some((value as i64 - self.min as i64) as usize)
        } else {
            None
        }
    }

    /// Ascending iterator over every value in the range
    pub fn values(self) -> std::ops::RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl fmt::Display for OperandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// How many copies each value receives when filling `total_cells`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Copies every value in the range receives
    pub base_count: usize,
    /// Number of smallest values receiving one extra copy
    pub remainder: usize,
}

impl DistributionPlan {
    /// Split `total_cells` across the range as evenly as integer division allows
    pub const fn new(total_cells: usize, range: OperandRange) -> Self {
        let range_size = range.size();
        Self {
            base_count: total_cells / range_size,
            remainder: total_cells % range_size,
        }
    }

    /// Copies assigned to the value at `offset` from the lower bound
    pub const fn count_at(self, offset: usize) -> usize {
        if offset < self.remainder {
            self.base_count + 1
        } else {
            self.base_count
        }
    }
}

/// Build the evenly distributed operand multiset in ascending order
///
/// Every value in the range appears `total_cells / size` times and the
/// `total_cells % size` smallest values receive one extra copy each.
pub fn build_distribution(total_cells: usize, range: OperandRange) -> Vec<i32> {
    let plan = DistributionPlan::new(total_cells, range);
    let mut operands = Vec::with_capacity(total_cells);

    for (offset, value) in range.values().enumerate() {
        let count = plan.count_at(offset);
        if count == 0 {
            break;
        }
        operands.extend(std::iter::repeat_n(value, count));
    }

    operands
}
