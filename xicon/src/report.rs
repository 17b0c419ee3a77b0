use crate::iconset::IconSpec;
use console::style;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 60;

/// Outcome of a batch run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub succeeded: usize,
    pub total: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.succeeded == self.total
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

fn ok_mark() -> String {
    style("✓").green().to_string()
}

fn err_mark() -> String {
    style("✗").red().to_string()
}

/// Prints progress of a batch to stdout and tallies the outcome.
pub struct Report {
    summary: Summary,
}

impl Report {
    pub fn start(logo_dir: &Path, output_dir: &Path, total: usize) -> Self {
        println!("Source: {}", logo_dir.display());
        println!("Output: {}", output_dir.display());
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
        Self {
            summary: Summary {
                succeeded: 0,
                total,
            },
        }
    }

    pub fn generated(&mut self, icon: &IconSpec) {
        self.summary.succeeded += 1;
        println!(
            "{} Generated: {} ({}x{})",
            ok_mark(),
            icon.file_name,
            icon.size,
            icon.size
        );
    }

    pub fn failed(&mut self, icon: &IconSpec, err: &anyhow::Error) {
        println!(
            "{} Failed to generate {}: {:#}",
            err_mark(),
            icon.file_name,
            err
        );
    }

    pub fn finish(self) -> Summary {
        let Summary { succeeded, total } = self.summary;
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
        println!(
            "{} Successfully generated {}/{} icons",
            ok_mark(),
            succeeded,
            total
        );
        if self.summary.is_success() {
            println!("{} All iOS app icons generated successfully!", ok_mark());
        } else {
            println!("{} Some icons failed to generate", err_mark());
        }
        self.summary
    }
}
