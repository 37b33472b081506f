//! Top/bottom placement of constant and operand for display

use crate::algorithm::operators::{Operator, Problem};
use rand::Rng;

/// The two stacked numbers of a vertical problem and its symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPair {
    /// Number printed on the upper line
    pub top: i64,
    /// Number printed beside the symbol on the lower line
    pub bottom: i64,
    /// Operator symbol
    pub symbol: char,
}

/// Turns a finished problem into something a grid layer can print
pub trait Presenter {
    /// Render one problem against the worksheet constant
    fn render(&mut self, problem: &Problem, constant: u32) -> DisplayPair;
}

/// Orient a problem given the outcome of the commutative coin flip
///
/// Addition and multiplication place the constant on top when
/// `constant_on_top` is set. Subtraction puts the larger value on top and
/// division shows `constant × operand` over the constant.
pub fn orient(problem: &Problem, constant: u32, constant_on_top: bool) -> DisplayPair {
    let constant = i64::from(constant);
    let operand = i64::from(problem.operand);

    let (top, bottom) = match problem.operator {
        Operator::Addition | Operator::Multiplication => {
            if constant_on_top {
                (constant, operand)
            } else {
                (operand, constant)
            }
        }
        Operator::Subtraction => (constant.max(operand), constant.min(operand)),
        Operator::Division => (constant * operand, constant),
    };

    DisplayPair {
        top,
        bottom,
        symbol: problem.operator.symbol(),
    }
}

/// Presenter flipping a fair coin for the order of commutative problems
pub struct RandomOrientation<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomOrientation<'a, R> {
    /// Wrap a random source
    pub const fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> Presenter for RandomOrientation<'_, R> {
    fn render(&mut self, problem: &Problem, constant: u32) -> DisplayPair {
        let constant_on_top = match problem.operator {
            Operator::Addition | Operator::Multiplication => self.rng.random_bool(0.5),
            Operator::Subtraction | Operator::Division => false,
        };
        orient(problem, constant, constant_on_top)
    }
}

/// Presenter that always puts the constant on top of commutative problems
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantOnTop;

impl Presenter for ConstantOnTop {
    fn render(&mut self, problem: &Problem, constant: u32) -> DisplayPair {
        orient(problem, constant, true)
    }
}
