//! Arithmetic operators, problems and random operator assignment

use rand::Rng;
use std::fmt;

/// One of the four arithmetic operations a worksheet cell can ask for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// Constant and operand summed
    #[default]
    Addition,
    /// Smaller value taken from the larger one
    Subtraction,
    /// Constant and operand multiplied
    Multiplication,
    /// Product of constant and operand divided by the constant
    Division,
}

impl Operator {
    /// Every operator in display order
    pub const ALL: [Self; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    /// Printed symbol for this operator
    pub const fn symbol(self) -> char {
        match self {
            Self::Addition => '+',
            Self::Subtraction => '-',
            Self::Multiplication => '×',
            Self::Division => '÷',
        }
    }

    /// Lowercase name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
        }
    }

    /// Parse an operator from a name, common abbreviation or symbol
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "addition" | "add" | "plus" | "+" => Some(Self::Addition),
            "subtraction" | "subtract" | "sub" | "minus" | "-" => Some(Self::Subtraction),
            "multiplication" | "multiply" | "mul" | "times" | "x" | "*" | "×" => {
                Some(Self::Multiplication)
            }
            "division" | "divide" | "div" | "/" | "÷" => Some(Self::Division),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-empty, duplicate-free set of operators in display order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorSet {
    operators: Vec<Operator>,
}

impl OperatorSet {
    /// Build a set from any operators, falling back to addition when none are given
    pub fn new(operators: impl IntoIterator<Item = Operator>) -> Self {
        let mut operators: Vec<Operator> = operators.into_iter().collect();
        operators.sort_unstable();
        operators.dedup();
        if operators.is_empty() {
            operators.push(Operator::Addition);
        }
        Self { operators }
    }

    /// Set holding every operator
    pub fn all() -> Self {
        Self::new(Operator::ALL)
    }

    /// Operators as a slice, never empty
    pub const fn as_slice(&self) -> &[Operator] {
        self.operators.as_slice()
    }

    /// Number of operators in the set
    pub const fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the set holds no operators
    pub const fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Check whether an operator belongs to the set
    pub fn contains(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Draw one operator uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        let index = rng.random_range(0..self.operators.len());
        self.operators.get(index).copied().unwrap_or_default()
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::new([Operator::Addition])
    }
}

/// A single worksheet cell: a drawn operand paired with an operator
///
/// The worksheet constant is shared by every problem and is not stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Problem {
    /// Value drawn from the operand range
    pub operand: i32,
    /// Operation applied between constant and operand
    pub operator: Operator,
}

impl Problem {
    /// Pair an operand with an operator
    pub const fn new(operand: i32, operator: Operator) -> Self {
        Self { operand, operator }
    }
}

/// Pair each operand with an operator drawn independently from the allowed set
pub fn assign_operators<R: Rng + ?Sized>(
    operands: &[i32],
    allowed: &OperatorSet,
    rng: &mut R,
) -> Vec<Problem> {
    operands
        .iter()
        .map(|&operand| Problem::new(operand, allowed.choose(rng)))
        .collect()
}
