// src/main.rs
mod attrs;
mod cli;
mod config;
mod error;
mod log;
mod prompt;
mod report;
mod router;
mod scanner;
mod transfer;
mod tui;

use clap::Parser;

use cli::Args;
use config::Settings;
use prompt::collect_run_config;
use transfer::Progress;
use tui::UI;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Load persisted defaults
    let settings = Settings::load()?;

    let args = Args::parse();

    let ui = UI::new()?.with_color_theme(settings.ui.theme.clone());
    ui.print_banner()?;

    // Collect parameters; anything not on the command line is prompted for
    let run_config = {
        let mut stdin = std::io::stdin().lock();
        collect_run_config(&args, &settings, &mut stdin, &ui)?
    };

    println!();
    ui.print_info("Run configuration:")?;
    println!("{}", run_config.echo_json()?);
    println!();

    // Phase 1: enumerate the source
    let spinner = ui.create_spinner("Scanning source directory...");
    let listing = scanner::scan(
        &run_config.source,
        &run_config.extension,
        run_config.recursive,
    )
    .await;
    spinner.finish_and_clear();

    let listing = match listing {
        Ok(listing) => listing,
        Err(e) => {
            ui.print_error(&format!("{:#}", e))?;
            ui.cleanup()?;
            return Ok(());
        }
    };

    ui.print_success(&format!("Matched {} file(s)", listing.entries.len()))?;
    println!();

    // Phase 2: copy, one file at a time
    let pb = ui.create_progress_bar(listing.entries.len() as u64, "Copying");
    let (_, warning_style, error_style, success_style) = ui.get_status_styles();

    let stats = transfer::run_copy(run_config.clone(), listing, {
        let pb = pb.clone();
        move |event| match event {
            Progress::Copy {
                file_name,
                date_folder,
            } => {
                pb.println(format!(
                    "{} {} → {}",
                    success_style.apply_to("copy").bold(),
                    file_name,
                    date_folder
                ));
                pb.inc(1);
            }
            Progress::Overwrite {
                file_name,
                date_folder,
            } => {
                pb.println(format!(
                    "{} {} → {}",
                    warning_style.apply_to("overwrite").bold(),
                    file_name,
                    date_folder
                ));
                pb.inc(1);
            }
            Progress::Skip {
                file_name,
                date_folder,
            } => {
                pb.println(format!(
                    "{} {} (exists in {})",
                    warning_style.apply_to("skip").bold(),
                    file_name,
                    date_folder
                ));
                pb.inc(1);
            }
            Progress::Failed { error, .. } => {
                pb.println(format!(
                    "{} {}",
                    error_style.apply_to("[!] ERROR:").bold(),
                    error
                ));
            }
            Progress::AttributeWarning { error, .. } => {
                pb.println(format!(
                    "{} {}",
                    warning_style.apply_to("[!] WARNING:").bold(),
                    error
                ));
            }
        }
    })
    .await?;

    pb.finish_and_clear();

    // Final tally
    ui.print_run_summary(&stats)?;
    println!();

    if !stats.errors.is_empty() || !stats.warnings.is_empty() {
        ui.print_warning("See log file for detailed error information")?;
    }

    // Write the run log into the destination root
    match log::write_run_log(&run_config.dest, &run_config, &stats).await {
        Ok(log_path) => ui.print_info(&format!("Log file: {}", log_path.display()))?,
        Err(e) => ui.print_warning(&format!("Failed to write log file: {}", e))?,
    }

    ui.cleanup()?;

    Ok(())
}
