//! Interactive parameter collection.
//!
//! Reads one line of text per prompt and assembles the immutable run
//! configuration. Input comes from any [`BufRead`] so the collector is
//! testable against a cursor; production passes a locked stdin. No path
//! validation happens here: malformed or empty input is accepted as a
//! literal value and fails later when the directory is opened. Case is
//! never altered on paths or the extension.

use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::cli::Args;
use crate::config::{RunConfig, Settings, MEBIBYTE};
use crate::tui::UI;

/// Reads one line, stripping only the trailing newline. The rest of the
/// line is kept verbatim.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// A yes/no flag is true only when the trimmed, lower-cased line equals
/// the literal `y`. Anything else, including empty input, means no.
pub fn parse_flag(line: &str) -> bool {
    line.trim().to_lowercase() == "y"
}

/// Parses a buffer size in MiB, falling back to the default when the line
/// is empty or unparseable.
pub fn parse_buffer_size_mib(line: &str, default_mib: u64) -> u64 {
    line.trim().parse().unwrap_or(default_mib)
}

/// Collects the run configuration from CLI arguments, falling back to an
/// interactive prompt for every value not supplied. Headless runs (source,
/// destination, and extension all on the command line) never prompt; the
/// remaining parameters take their flag or settings defaults.
pub fn collect_run_config<R: BufRead>(
    args: &Args,
    settings: &Settings,
    input: &mut R,
    ui: &UI,
) -> color_eyre::Result<RunConfig> {
    let headless = args.is_headless();

    let source = match &args.source {
        Some(path) => path.clone(),
        None => {
            ui.print_prompt("Source directory")?;
            PathBuf::from(read_line(input)?)
        }
    };

    let dest = match &args.dest {
        Some(path) => path.clone(),
        None => {
            ui.print_prompt("Destination directory")?;
            PathBuf::from(read_line(input)?)
        }
    };

    let extension = match &args.extension {
        Some(ext) => ext.clone(),
        None => {
            ui.print_prompt("File extension filter (e.g. .jpg)")?;
            read_line(input)?
        }
    };

    let default_mib = settings.copy.buffer_size_mib;
    let buffer_size_mib = match args.buffer_size_mib {
        Some(mib) => mib,
        None if headless => default_mib,
        None => {
            ui.print_prompt(&format!(
                "Copy buffer size in MiB (default {})",
                default_mib
            ))?;
            parse_buffer_size_mib(&read_line(input)?, default_mib)
        }
    };

    let overwrite = if headless || args.overwrite {
        args.overwrite
    } else {
        ui.print_prompt("Overwrite existing files? [y/N]")?;
        parse_flag(&read_line(input)?)
    };

    let recursive = if headless || args.recursive {
        args.recursive
    } else {
        ui.print_prompt("Recurse into subdirectories? [y/N]")?;
        parse_flag(&read_line(input)?)
    };

    let preserve_times = settings.copy.preserve_times && !args.no_preserve_times;

    Ok(RunConfig {
        source,
        dest,
        extension,
        overwrite,
        recursive,
        buffer_size: buffer_size_mib.max(1) * MEBIBYTE,
        preserve_times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn ui() -> UI {
        UI::new().unwrap()
    }

    #[test]
    fn test_parse_flag_literal_y_only() {
        assert!(parse_flag("y"));
        assert!(parse_flag("Y"));
        assert!(parse_flag("  y  "));
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("n"));
        assert!(!parse_flag("true"));
    }

    #[test]
    fn test_parse_buffer_size_fallback() {
        assert_eq!(parse_buffer_size_mib("4", 1), 4);
        assert_eq!(parse_buffer_size_mib(" 16 ", 1), 16);
        assert_eq!(parse_buffer_size_mib("", 1), 1);
        assert_eq!(parse_buffer_size_mib("lots", 2), 2);
        assert_eq!(parse_buffer_size_mib("-3", 1), 1);
    }

    #[test]
    fn test_collect_fully_interactive() {
        let args = Args::parse_from(["stamp"]);
        let settings = Settings::default();
        let mut input = Cursor::new("/photos/card\n/photos/sorted\n.JPG\n\ny\nn\n");

        let config = collect_run_config(&args, &settings, &mut input, &ui()).unwrap();

        assert_eq!(config.source, PathBuf::from("/photos/card"));
        assert_eq!(config.dest, PathBuf::from("/photos/sorted"));
        // Case is preserved; matching happens downstream
        assert_eq!(config.extension, ".JPG");
        assert_eq!(config.buffer_size, MEBIBYTE);
        assert!(config.overwrite);
        assert!(!config.recursive);
        assert!(config.preserve_times);
    }

    #[test]
    fn test_collect_args_skip_prompts() {
        let args = Args::parse_from([
            "stamp",
            "/src",
            "/dst",
            "--extension",
            ".png",
            "--buffer-size-mib",
            "8",
            "--overwrite",
            "--recursive",
        ]);
        let settings = Settings::default();
        // Nothing to read: every value came from the CLI
        let mut input = Cursor::new("");

        let config = collect_run_config(&args, &settings, &mut input, &ui()).unwrap();

        assert_eq!(config.extension, ".png");
        assert_eq!(config.buffer_size, 8 * MEBIBYTE);
        assert!(config.overwrite);
        assert!(config.recursive);
    }

    #[test]
    fn test_collect_empty_path_accepted_literally() {
        let args = Args::parse_from(["stamp"]);
        let settings = Settings::default();
        let mut input = Cursor::new("\n\n.jpg\n\n\n\n");

        let config = collect_run_config(&args, &settings, &mut input, &ui()).unwrap();

        // Empty paths pass through; opening the directory fails later
        assert_eq!(config.source, PathBuf::from(""));
        assert_eq!(config.dest, PathBuf::from(""));
        assert!(!config.overwrite);
        assert!(!config.recursive);
    }

    #[test]
    fn test_collect_no_preserve_times_flag() {
        let args = Args::parse_from(["stamp", "/s", "/d", "-e", ".jpg", "--no-preserve-times"]);
        let settings = Settings::default();
        let mut input = Cursor::new("\n\n\n");

        let config = collect_run_config(&args, &settings, &mut input, &ui()).unwrap();
        assert!(!config.preserve_times);
    }
}
