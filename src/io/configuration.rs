//! Defaults, bounds and sanitizing of raw worksheet settings
//!
//! Input arrives as free text from the command line. Anything that does not
//! parse or falls outside its bounds is replaced by the documented default,
//! and each replacement is recorded so the caller can tell the user.

use crate::algorithm::distribution::OperandRange;
use crate::algorithm::executor::GenerationConfig;
use crate::algorithm::operators::{Operator, OperatorSet};
use std::fmt;
use std::str::FromStr;

/// Constant used when none or an invalid one is given
pub const DEFAULT_CONSTANT: u32 = 2;
/// Largest accepted constant
pub const MAX_CONSTANT: u32 = 100;

/// Default grid rows per page
pub const DEFAULT_ROWS: usize = 5;
/// Default grid columns per page
pub const DEFAULT_COLUMNS: usize = 4;
// Keeps a single page printable and bounds memory
/// Maximum rows or columns on a page
pub const MAX_GRID_DIMENSION: usize = 100;

/// Default number of pages
pub const DEFAULT_PAGES: usize = 1;
/// Maximum number of pages in one run
pub const MAX_PAGES: usize = 100;

/// Default smallest drawn operand
pub const DEFAULT_MIN_RANDOM: i32 = 2;
/// Default largest drawn operand
pub const DEFAULT_MAX_RANDOM: i32 = 12;
// Bounds the frequency tally, which holds one counter per range value
/// Largest accepted operand magnitude
pub const OPERAND_LIMIT: i32 = 9_999;

/// Default number of preceding problems checked for repeats
pub const DEFAULT_REPETITION_WINDOW: usize = 3;

// Output settings
/// Suffix placed before the page number in multi-page file names
pub const PAGE_SUFFIX: &str = "_page";
/// Width of the page progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Pixel scale applied to each glyph dot in PNG output
pub const GLYPH_SCALE: u32 = 4;
/// Blank glyph columns around each PNG cell
pub const CELL_PADDING_GLYPHS: u32 = 2;

/// One default substituted for an unusable input value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Correction {
    /// Name of the setting
    pub field: &'static str,
    /// Text the user supplied
    pub given: String,
    /// Value used instead
    pub substituted: String,
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' is not usable, using {}",
            self.field, self.given, self.substituted
        )
    }
}

/// Raw, unvalidated worksheet settings as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    /// Fixed operand
    pub constant: Option<String>,
    /// Grid rows
    pub rows: Option<String>,
    /// Grid columns
    pub columns: Option<String>,
    /// Number of pages
    pub pages: Option<String>,
    /// Operator names or symbols
    pub operators: Vec<String>,
    /// Smallest drawn operand
    pub min_random: Option<String>,
    /// Largest drawn operand
    pub max_random: Option<String>,
    /// Repetition window length
    pub repetition_window: Option<String>,
}

/// Validated settings ready for generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizedInput {
    /// Config shared by every page
    pub config: GenerationConfig,
    /// Number of pages to generate
    pub pages: usize,
    /// Defaults that replaced unusable input
    pub corrections: Vec<Correction>,
}

/// Parse `raw` and accept it if `valid`, otherwise fall back to `default`
fn parse_or_default<T>(
    field: &'static str,
    raw: Option<&str>,
    default: T,
    valid: impl Fn(&T) -> bool,
    corrections: &mut Vec<Correction>,
) -> T
where
    T: FromStr + fmt::Display,
{
    let Some(text) = raw else {
        return default;
    };

    match text.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            corrections.push(Correction {
                field,
                given: text.to_string(),
                substituted: default.to_string(),
            });
            default
        }
    }
}

fn sanitize_operators(raw: &[String], corrections: &mut Vec<Correction>) -> OperatorSet {
    let mut selected = Vec::new();

    for text in raw.iter().flat_map(|entry| entry.split(',')) {
        if text.trim().is_empty() {
            continue;
        }
        match Operator::parse(text) {
            Some(operator) => selected.push(operator),
            None => corrections.push(Correction {
                field: "operator",
                given: text.to_string(),
                substituted: "nothing (ignored)".to_string(),
            }),
        }
    }

    if selected.is_empty() && !raw.is_empty() {
        corrections.push(Correction {
            field: "operators",
            given: raw.join(","),
            substituted: Operator::Addition.to_string(),
        });
    }

    OperatorSet::new(selected)
}

impl FormInput {
    /// Replace every unusable value by its default and build the generation config
    pub fn sanitize(&self) -> SanitizedInput {
        let mut corrections = Vec::new();

        let constant = parse_or_default(
            "constant",
            self.constant.as_deref(),
            DEFAULT_CONSTANT,
            |&c| (1..=MAX_CONSTANT).contains(&c),
            &mut corrections,
        );
        let rows = parse_or_default(
            "rows",
            self.rows.as_deref(),
            DEFAULT_ROWS,
            |&r| (1..=MAX_GRID_DIMENSION).contains(&r),
            &mut corrections,
        );
        let columns = parse_or_default(
            "columns",
            self.columns.as_deref(),
            DEFAULT_COLUMNS,
            |&c| (1..=MAX_GRID_DIMENSION).contains(&c),
            &mut corrections,
        );
        let pages = parse_or_default(
            "pages",
            self.pages.as_deref(),
            DEFAULT_PAGES,
            |&p| (1..=MAX_PAGES).contains(&p),
            &mut corrections,
        );
        let in_limits = |&v: &i32| (-OPERAND_LIMIT..=OPERAND_LIMIT).contains(&v);
        let min_random = parse_or_default(
            "min",
            self.min_random.as_deref(),
            DEFAULT_MIN_RANDOM,
            in_limits,
            &mut corrections,
        );
        let max_random = parse_or_default(
            "max",
            self.max_random.as_deref(),
            DEFAULT_MAX_RANDOM,
            in_limits,
            &mut corrections,
        );
        let repetition_window = parse_or_default(
            "window",
            self.repetition_window.as_deref(),
            DEFAULT_REPETITION_WINDOW,
            |_| true,
            &mut corrections,
        );

        if min_random > max_random {
            corrections.push(Correction {
                field: "range",
                given: format!("{min_random}..{max_random}"),
                substituted: format!("{max_random}..{min_random}"),
            });
        }

        let allowed_operators = sanitize_operators(&self.operators, &mut corrections);

        SanitizedInput {
            config: GenerationConfig {
                constant,
                rows,
                columns,
                allowed_operators,
                range: OperandRange::new(min_random, max_random),
                repetition_window,
            },
            pages,
            corrections,
        }
    }
}
