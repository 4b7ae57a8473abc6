// ABOUTME: Summary table of the files written by a generation run
// ABOUTME: One row per file with its package and generator

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::generate::GeneratedFile;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Generator")]
    generator: String,
    #[tabled(rename = "File")]
    file: String,
}

pub struct SummaryFormatter {
    use_color: bool,
}

impl SummaryFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn format_package(&self, package: &str) -> String {
        if self.use_color {
            package.bold().to_string()
        } else {
            package.to_string()
        }
    }

    pub fn format_files(&self, files: &[GeneratedFile]) -> String {
        let rows: Vec<SummaryRow> = files
            .iter()
            .map(|f| SummaryRow {
                package: self.format_package(&f.package),
                generator: f.generator.clone(),
                file: f.path.display().to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        table.to_string()
    }
}
