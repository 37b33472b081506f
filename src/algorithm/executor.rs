//! Worksheet generation pipeline: distribute, shuffle, assign, repair

use crate::{
    algorithm::distribution::{OperandRange, build_distribution},
    algorithm::operators::{OperatorSet, Problem, assign_operators},
    algorithm::repetition::{RepairReport, count_window_conflicts, enforce_repetition_window},
    algorithm::shuffle::fisher_yates,
    analysis::statistics::FrequencyTally,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters for one worksheet, read-only once built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Fixed operand shared by every problem
    pub constant: u32,
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub columns: usize,
    /// Operators problems may use
    pub allowed_operators: OperatorSet,
    /// Inclusive range the drawn operands come from
    pub range: OperandRange,
    /// Number of preceding problems checked for a repeat
    pub repetition_window: usize,
}

impl GenerationConfig {
    /// Number of cells in the grid
    pub const fn total_cells(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }
}

/// Finished problem sequence together with the config that produced it
#[derive(Clone, Debug)]
pub struct Worksheet {
    /// Parameters the sheet was generated from
    pub config: GenerationConfig,
    /// Problems in row-major display order
    pub problems: Vec<Problem>,
    /// Counters from the repetition repair pass
    pub repair: RepairReport,
}

impl Worksheet {
    /// Operand frequencies over the configured range
    pub fn tally(&self) -> FrequencyTally {
        FrequencyTally::from_problems(&self.problems, self.config.range)
    }

    /// Window repeats still present after repair
    pub fn remaining_conflicts(&self) -> usize {
        count_window_conflicts(&self.problems, self.config.repetition_window)
    }
}

/// Generate one worksheet from an immutable config and an injected random source
///
/// Operands are evenly distributed over the range, shuffled, paired with
/// uniformly drawn operators and finally passed through the repetition repair.
pub fn generate_worksheet<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Worksheet {
    let mut operands = build_distribution(config.total_cells(), config.range);
    fisher_yates(&mut operands, rng);

    let mut problems = assign_operators(&operands, &config.allowed_operators, rng);
    let repair = enforce_repetition_window(&mut problems, config.repetition_window);

    Worksheet {
        config: config.clone(),
        problems,
        repair,
    }
}

/// Seeded generator producing successive pages from one random stream
pub struct WorksheetGenerator {
    config: GenerationConfig,
    rng: StdRng,
    /// Seed the stream was created from
    pub seed: u64,
}

impl WorksheetGenerator {
    /// Create a deterministic generator
    pub fn new(config: GenerationConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Config every page is generated from
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Random stream shared with the presenter so one seed reproduces a whole run
    pub const fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Generate the next page
    pub fn next_page(&mut self) -> Worksheet {
        generate_worksheet(&self.config, &mut self.rng)
    }
}
