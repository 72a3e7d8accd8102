//! Terminal output components.
//!
//! Themed banner, status lines, spinner/progress bar, and the final run
//! summary. The theme name comes from the persisted settings.

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;

use crate::report::RunStats;

pub const BANNER: &str = r#"
         __
   _____/ /_____ _____ ___  ____
  / ___/ __/ __ `/ __ `__ \/ __ \
 (__  ) /_/ /_/ / / / / / / /_/ /
/____/\__/\__,_/_/ /_/ /_/ .___/
                        /_/      "#;

pub struct UI {
    pub term: Term,
    pub color_theme: String,
}

impl UI {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            color_theme: "default".to_string(),
        })
    }

    pub fn with_color_theme(mut self, theme: String) -> Self {
        self.color_theme = theme;
        self
    }

    /// Get the console::Style for the configured theme
    fn get_style(&self) -> Style {
        match self.color_theme.as_str() {
            "cyan" => Style::new().cyan(),
            "magenta" => Style::new().magenta(),
            "yellow" => Style::new().yellow(),
            "green" => Style::new().green(),
            "red" => Style::new().red(),
            "blue" => Style::new().blue(),
            "white" => Style::new().white(),
            _ => Style::new().white(),
        }
    }

    /// Get different shades for status lines based on theme
    /// Returns (info_style, warning_style, error_style, success_style)
    pub fn get_status_styles(&self) -> (Style, Style, Style, Style) {
        let base = self.get_style();
        let (warning, error, success) = match self.color_theme.as_str() {
            "cyan" => (51, 87, 123),
            "magenta" => (201, 126, 213),
            "yellow" => (226, 178, 227),
            "green" => (46, 28, 120),
            "red" => (196, 124, 210),
            "blue" => (39, 25, 117),
            _ => (255, 250, 255),
        };

        (
            base,
            Style::new().color256(warning),
            Style::new().color256(error),
            Style::new().color256(success),
        )
    }

    /// Get bar colors (spinner_color, bar_color) for progress bar templates
    fn get_bar_colors(&self) -> (&str, &str) {
        match self.color_theme.as_str() {
            "cyan" => (".cyan", "bright_cyan/bright_cyan"),
            "magenta" => (".magenta", "bright_magenta/bright_magenta"),
            "yellow" => (".yellow", "bright_yellow/bright_yellow"),
            "green" => (".green", "bright_green/bright_green"),
            "red" => (".red", "bright_red/bright_red"),
            "blue" => (".blue", "bright_blue/bright_blue"),
            _ => (".white", "bright_white/bright_white"),
        }
    }

    /// Print the banner with a separator rule
    pub fn print_banner(&self) -> io::Result<()> {
        let style = self.get_style();
        let white_bold = Style::new().white().bold();

        println!("{}", style.apply_to(BANNER).bold());
        println!();
        println!("{}", white_bold.apply_to("=".repeat(70)));
        Ok(())
    }

    /// Create a spinner for indeterminate phases
    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let (spinner_color, _) = self.get_bar_colors();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(&format!("{{spinner:{}}} {{msg}}", spinner_color))
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Create a progress bar with known total
    pub fn create_progress_bar(&self, total: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let (spinner_color, bar_color) = self.get_bar_colors();
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&format!(
                    "{{spinner:{}}} {{bar:40.{}/{}}} {{pos}}/{{len}} ({{percent}}%) {{msg}}",
                    spinner_color, bar_color, bar_color
                ))
                .unwrap()
                .progress_chars("█ ")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Print an info message
    pub fn print_info(&self, message: &str) -> io::Result<()> {
        let (info_style, _, _, _) = self.get_status_styles();
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            info_style.apply_to("[*]").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print a prompt line ahead of reading one value from stdin
    pub fn print_prompt(&self, message: &str) -> io::Result<()> {
        let style = self.get_style();
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            style.apply_to("[?]").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) -> io::Result<()> {
        let (_, _, error_style, _) = self.get_status_styles();
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            error_style.apply_to("[!] ERROR:").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) -> io::Result<()> {
        let (_, _, _, success_style) = self.get_status_styles();
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            success_style.apply_to("[✓]").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) -> io::Result<()> {
        let (_, warning_style, _, _) = self.get_status_styles();
        let white_bold = Style::new().white().bold();
        println!(
            "{} {}",
            warning_style.apply_to("[!] WARNING:").bold(),
            white_bold.apply_to(message)
        );
        Ok(())
    }

    /// Print the final tally block
    pub fn print_run_summary(&self, stats: &RunStats) -> io::Result<()> {
        let style = self.get_style();
        let white_bold = Style::new().white().bold();

        let rows = [
            ("Copied:", stats.copied),
            ("Skipped:", stats.skipped),
            ("Overwritten:", stats.overwritten),
            ("Errors:", stats.errored),
        ];

        println!();
        println!("{}", white_bold.apply_to("=".repeat(70)));
        println!("{}", style.apply_to("RUN COMPLETE").bold());
        println!("{}", white_bold.apply_to("=".repeat(70)));

        for (label, count) in rows {
            println!(
                "  {} {}",
                style.apply_to(format!("{:<13}", label)).bold(),
                white_bold.apply_to(count.to_string()).italic()
            );
        }

        println!(
            "  {} {}",
            style.apply_to(format!("{:<13}", "Data copied:")).bold(),
            white_bold
                .apply_to(format_size(stats.bytes_copied))
                .italic()
        );
        println!("{}", white_bold.apply_to("=".repeat(70)));

        Ok(())
    }

    /// Cleanup the terminal (show cursor, etc.)
    pub fn cleanup(&self) -> io::Result<()> {
        self.term.show_cursor()?;
        Ok(())
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Format a byte count as a human-readable size
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}
