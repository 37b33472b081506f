//! Tests for operand frequency tallies

#[cfg(test)]
mod tests {
    use factsheet::algorithm::distribution::OperandRange;
    use factsheet::algorithm::operators::{Operator, Problem};
    use factsheet::analysis::statistics::FrequencyTally;

    // Tests counts per value including values never drawn
    // Verified by skipping zero-count values
    #[test]
    fn test_counts_per_value() {
        let tally = FrequencyTally::from_operands([2, 3, 3, 5], OperandRange::new(2, 5));

        assert_eq!(
            tally.iter().collect::<Vec<_>>(),
            vec![(2, 1), (3, 2), (4, 0), (5, 1)]
        );
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.spread(), (0, 2));
    }

    // Tests values outside the range are counted separately
    // Verified by clamping out-of-range values to the bounds
    #[test]
    fn test_out_of_range_values() {
        let tally = FrequencyTally::from_operands([0, 1, 9], OperandRange::new(1, 3));

        assert_eq!(tally.count(1), 1);
        assert_eq!(tally.count(0), 0);
        assert_eq!(tally.out_of_range, 2);
        assert_eq!(tally.total(), 1);
    }

    // Tests tallying problems uses their operands
    // Verified by tallying operator indices instead
    #[test]
    fn test_from_problems() {
        let problems = [
            Problem::new(4, Operator::Addition),
            Problem::new(4, Operator::Division),
            Problem::new(6, Operator::Subtraction),
        ];
        let tally = FrequencyTally::from_problems(&problems, OperandRange::new(4, 6));

        assert_eq!(tally.count(4), 2);
        assert_eq!(tally.count(5), 0);
        assert_eq!(tally.count(6), 1);
        assert_eq!(tally.range(), OperandRange::new(4, 6));
    }

    // Tests histogram display has one bar line per value
    // Verified by omitting zero-count lines
    #[test]
    fn test_display_histogram() {
        let tally = FrequencyTally::from_operands([10, 10, 12], OperandRange::new(10, 12));
        let text = tally.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("10 | 2 ##"));
        assert!(lines[1].starts_with("11 | 0"));
        assert!(lines[2].ends_with("#"));
    }

    // Tests a full-width range stays cheap and reports unseen values as zero
    // Verified by allocating one counter per range value
    #[test]
    fn test_full_width_range_is_sparse() {
        let range = OperandRange::new(i32::MIN, i32::MAX);
        let tally = FrequencyTally::from_operands([i32::MIN, 0, 0, i32::MAX], range);

        assert_eq!(tally.count(0), 2);
        assert_eq!(tally.count(i32::MIN), 1);
        assert_eq!(tally.count(1), 0);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.spread(), (0, 2));
        assert_eq!(
            tally.observed().collect::<Vec<_>>(),
            vec![(i32::MIN, 1), (0, 2), (i32::MAX, 1)]
        );
    }

    // Tests spread when every value in the range occurs
    // Verified by always reporting zero as the minimum
    #[test]
    fn test_spread_with_full_coverage() {
        let tally = FrequencyTally::from_operands([1, 1, 2, 3, 3, 3], OperandRange::new(1, 3));
        assert_eq!(tally.spread(), (1, 3));
    }
}
