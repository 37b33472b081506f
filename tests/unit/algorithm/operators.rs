//! Tests for operator parsing, operator sets and random assignment

#[cfg(test)]
mod tests {
    use factsheet::algorithm::operators::{Operator, OperatorSet, Problem, assign_operators};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    // Tests names, abbreviations and symbols all parse
    // Verified by removing the symbol arms
    #[test]
    fn test_parse_names_and_symbols() {
        assert_eq!(Operator::parse("addition"), Some(Operator::Addition));
        assert_eq!(Operator::parse(" Plus "), Some(Operator::Addition));
        assert_eq!(Operator::parse("-"), Some(Operator::Subtraction));
        assert_eq!(Operator::parse("x"), Some(Operator::Multiplication));
        assert_eq!(Operator::parse("×"), Some(Operator::Multiplication));
        assert_eq!(Operator::parse("DIVISION"), Some(Operator::Division));
        assert_eq!(Operator::parse("÷"), Some(Operator::Division));
        assert_eq!(Operator::parse("modulo"), None);
    }

    // Tests unrecognized operator text does not parse
    // Verified by mapping unknown text to addition inside parse
    #[test]
    fn test_unknown_text_does_not_parse() {
        assert_eq!(Operator::parse("bogus"), None);
        assert_eq!(Operator::parse(""), None);
        assert_eq!(Operator::parse("div"), Some(Operator::Division));
    }

    // Tests the slice view of a set in a constant-friendly accessor
    // Verified by returning the operators in insertion order
    #[test]
    fn test_as_slice_and_len_agree() {
        let set = OperatorSet::new([Operator::Multiplication, Operator::Subtraction]);
        assert_eq!(
            set.as_slice(),
            &[Operator::Subtraction, Operator::Multiplication]
        );
        assert_eq!(set.as_slice().len(), set.len());
        assert!(!set.is_empty());
    }

    // Tests symbols and display names
    // Verified by swapping multiplication and division symbols
    #[test]
    fn test_symbols_and_names() {
        assert_eq!(Operator::Addition.symbol(), '+');
        assert_eq!(Operator::Subtraction.symbol(), '-');
        assert_eq!(Operator::Multiplication.symbol(), '×');
        assert_eq!(Operator::Division.symbol(), '÷');
        assert_eq!(Operator::Division.to_string(), "division");
        for operator in Operator::ALL {
            assert_eq!(Operator::parse(operator.name()), Some(operator));
        }
    }

    // Tests an empty selection becomes addition only
    // Verified by allowing empty sets
    #[test]
    fn test_empty_set_defaults_to_addition() {
        let set = OperatorSet::new([]);
        assert_eq!(set.as_slice(), &[Operator::Addition]);
        assert!(!set.is_empty());
        assert_eq!(OperatorSet::default(), set);
    }

    // Tests duplicates are removed and order is canonical
    // Verified by skipping dedup
    #[test]
    fn test_set_deduplicates() {
        let set = OperatorSet::new([
            Operator::Division,
            Operator::Addition,
            Operator::Division,
        ]);
        assert_eq!(set.as_slice(), &[Operator::Addition, Operator::Division]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Operator::Division));
        assert!(!set.contains(Operator::Subtraction));
        assert_eq!(OperatorSet::all().len(), 4);
    }

    // Tests assignment keeps operands in place and uses only allowed operators
    // Verified by drawing from Operator::ALL instead of the set
    #[test]
    fn test_assign_operators_respects_allowed_set() {
        let operands: Vec<i32> = (0..200).map(|v| v % 10).collect();
        let allowed = OperatorSet::new([Operator::Subtraction, Operator::Multiplication]);
        let mut rng = StdRng::seed_from_u64(11);

        let problems = assign_operators(&operands, &allowed, &mut rng);

        assert_eq!(problems.len(), operands.len());
        for (problem, &operand) in problems.iter().zip(&operands) {
            assert_eq!(problem.operand, operand);
            assert!(allowed.contains(problem.operator));
        }
        let used: HashSet<Operator> = problems.iter().map(|p| p.operator).collect();
        assert_eq!(used.len(), 2, "both operators should appear in 200 draws");
    }

    // Tests each operator is drawn with roughly equal frequency
    // Verified by always choosing the first operator
    #[test]
    fn test_choose_is_roughly_uniform() {
        let set = OperatorSet::all();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            let operator = set.choose(&mut rng);
            let index = Operator::ALL
                .iter()
                .position(|&o| o == operator)
                .unwrap_or(0);
            counts[index] += 1;
        }

        for count in counts {
            assert!((850..=1150).contains(&count), "count {count}");
        }
    }

    // Tests problems compare by both operand and operator
    // Verified by deriving equality on operand only
    #[test]
    fn test_problem_equality() {
        let a = Problem::new(3, Operator::Addition);
        assert_eq!(a, Problem::new(3, Operator::Addition));
        assert_ne!(a, Problem::new(3, Operator::Subtraction));
        assert_ne!(a, Problem::new(4, Operator::Addition));
    }
}
