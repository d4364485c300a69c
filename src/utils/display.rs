//! Display and output formatting utilities

use crate::game_of_life::Board;
use crate::harness::RunReport;

/// Text rendering of boards and run reports
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render a run as a table, fastest method marked
    pub fn format_report(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Board {}x{}, {} generations, {} live cells at start\n\n",
            report.height, report.width, report.generations, report.initial_living_cells
        ));
        output.push_str("Method          | Total(ms) | Avg/gen(us) |    Gen/s | Living | Agrees\n");
        output.push_str("----------------|-----------|-------------|----------|--------|-------\n");

        let fastest = report.fastest().map(|method| method.name.as_str());
        for method in &report.methods {
            let marker = if Some(method.name.as_str()) == fastest { "*" } else { " " };
            output.push_str(&format!(
                "{:<14}{} | {:9.3} | {:11.3} | {:8.1} | {:6} | {}\n",
                method.name,
                marker,
                method.total_ms,
                method.avg_generation_us,
                method.generations_per_second,
                method.final_living_cells,
                if method.agrees { "yes" } else { "NO" }
            ));
        }

        output
    }

    /// Format a board in compact form
    pub fn format_board_compact(board: &Board) -> String {
        let mut output = String::with_capacity(board.height() * (board.width() * 3 + 1));
        for row in 0..board.height() {
            for &cell in board.row(row) {
                output.push(if cell == 1 { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with row and column numbers
    pub fn format_board_with_coords(board: &Board) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..board.width() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..board.height() {
            output.push_str(&format!("{:2} ", row));
            for &cell in board.row(row) {
                output.push_str(if cell == 1 { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
