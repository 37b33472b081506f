//! Command-line interface for generating worksheet pages

use crate::algorithm::executor::{Worksheet, WorksheetGenerator};
use crate::io::configuration::{Correction, FormInput, PAGE_SUFFIX, SanitizedInput};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::io::text::{render_text, write_text};
use crate::presentation::layout::WorksheetGrid;
use crate::presentation::orientation::RandomOrientation;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Output encodings for a worksheet page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one vertical problem per cell
    #[default]
    Text,
    /// Grayscale PNG image
    Png,
}

impl OutputFormat {
    /// File extension used for page files
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Png => "png",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "factsheet")]
#[command(
    author,
    version,
    about = "Generate printable vertical arithmetic-fact worksheets"
)]
/// Command-line arguments for the worksheet generator
///
/// Numeric settings are taken as text so that unusable values can be
/// replaced by defaults instead of aborting the run.
pub struct Cli {
    /// Fixed number appearing in every problem
    #[arg(short, long, allow_hyphen_values = true)]
    pub constant: Option<String>,

    /// Rows of problems per page
    #[arg(short, long, allow_hyphen_values = true)]
    pub rows: Option<String>,

    /// Columns of problems per page
    #[arg(short = 'C', long, allow_hyphen_values = true)]
    pub columns: Option<String>,

    /// Number of pages to generate
    #[arg(short, long, allow_hyphen_values = true)]
    pub pages: Option<String>,

    /// Operators to use, by name or symbol (comma separated, repeatable)
    #[arg(short, long = "operators", value_name = "OPERATORS")]
    pub operators: Vec<String>,

    /// Smallest drawn operand
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Largest drawn operand
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Number of preceding problems checked for a repeated operand and operator
    #[arg(short, long, allow_hyphen_values = true)]
    pub window: Option<String>,

    /// Random seed for reproducible worksheets (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file (text goes to stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print operand frequencies and repetition diagnostics to stderr
    #[arg(short, long)]
    pub tally: bool,

    /// Suppress warnings and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Raw settings as entered on the command line
    pub fn form_input(&self) -> FormInput {
        FormInput {
            constant: self.constant.clone(),
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            pages: self.pages.clone(),
            operators: self.operators.clone(),
            min_random: self.min.clone(),
            max_random: self.max.clone(),
            repetition_window: self.window.clone(),
        }
    }

    /// Check if warnings and progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Path for one page of a run; single-page runs use `base` unchanged
pub fn page_path(base: &Path, page: usize, pages: usize) -> PathBuf {
    if pages <= 1 {
        return base.to_path_buf();
    }

    let stem = base.file_stem().unwrap_or_default();
    let page_name = match base.extension() {
        Some(extension) => format!(
            "{}{PAGE_SUFFIX}{page}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        ),
        None => format!("{}{PAGE_SUFFIX}{page}", stem.to_string_lossy()),
    };

    if let Some(parent) = base.parent() {
        parent.join(page_name)
    } else {
        PathBuf::from(page_name)
    }
}

/// Drives sanitizing, generation and export for one invocation
pub struct WorksheetRunner {
    cli: Cli,
    input: SanitizedInput,
    seed: u64,
}

impl WorksheetRunner {
    /// Sanitize the CLI settings and fix the seed for this run
    pub fn new(cli: Cli) -> Self {
        let input = cli.form_input().sanitize();
        let seed = cli.seed.unwrap_or_else(rand::random);

        Self { cli, input, seed }
    }

    /// Settings after defaults were applied
    pub const fn input(&self) -> &SanitizedInput {
        &self.input
    }

    /// Seed every page of this run is drawn from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate and export every requested page
    ///
    /// # Errors
    ///
    /// Returns an error if PNG output is requested without a path, or if
    /// writing any page fails
    pub fn run(&self) -> Result<()> {
        if self.cli.format == OutputFormat::Png && self.cli.output.is_none() {
            return Err(invalid_parameter(
                "output",
                &"",
                &"PNG output needs a file path (--output)",
            ));
        }

        if self.cli.should_show_progress() {
            Self::report_corrections(&self.input.corrections);
            Self::report_seed(self.seed);
        }

        let pages = self.input.pages;
        let progress = ProgressManager::new(pages, self.cli.should_show_progress());
        let mut generator = WorksheetGenerator::new(self.input.config.clone(), self.seed);

        let mut stdout_text = String::new();
        for page in 1..=pages {
            let worksheet = generator.next_page();
            let grid = WorksheetGrid::build(
                &worksheet,
                &mut RandomOrientation::new(generator.rng()),
            )?;

            if self.cli.tally {
                Self::report_diagnostics(page, &worksheet);
            }

            match (&self.cli.output, self.cli.format) {
                (Some(base), OutputFormat::Png) => {
                    export_png(&grid, &page_path(base, page, pages))?;
                }
                (Some(base), OutputFormat::Text) => {
                    write_text(&render_text(&grid), Some(&page_path(base, page, pages)))?;
                }
                (None, _) => {
                    // Form feed between pages for printers
                    if page > 1 {
                        stdout_text.push('\u{c}');
                    }
                    stdout_text.push_str(&render_text(&grid));
                }
            }

            progress.complete_page(page);
        }
        progress.finish();

        if self.cli.output.is_none() {
            write_text(&stdout_text, None)?;
        }

        Ok(())
    }

    // Allow print for user feedback on substituted defaults
    #[allow(clippy::print_stderr)]
    fn report_corrections(corrections: &[Correction]) {
        for correction in corrections {
            eprintln!("Warning: {correction}");
        }
    }

    #[allow(clippy::print_stderr)]
    fn report_seed(seed: u64) {
        eprintln!("Seed: {seed}");
    }

    // Allow print for diagnostic tally requested with --tally
    #[allow(clippy::print_stderr)]
    fn report_diagnostics(page: usize, worksheet: &Worksheet) {
        let tally = worksheet.tally();
        let (least, most) = tally.spread();
        eprintln!(
            "Page {page}: {} problems, operands {} ({least}-{most} each)",
            worksheet.problems.len(),
            tally.range()
        );
        eprint!("{tally}");
        eprintln!(
            "Repetition window {}: {} conflicts, {} swapped, {} unresolved, {} remaining",
            worksheet.config.repetition_window,
            worksheet.repair.conflicts_detected,
            worksheet.repair.swaps_performed,
            worksheet.repair.unresolved,
            worksheet.remaining_conflicts()
        );
    }
}
