//! Interactive prompt flow and plain listings

use crate::application::RecoveryService;
use crate::domain::entities::{DISPLAY_TIME_FORMAT, LostXray, ScanOutcome};
use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};

/// Shown before the first scan
pub const TERMS_OF_USE: &str = "\
How to use:
  1. Lost X-rays are listed once you agree to these terms.
  2. Pick an X-ray from the list; its preview path is shown next to it.
  3. The selected X-ray is copied to the \"recovered X-rays\" folder on your desktop.

Disclaimer:
  This tool is meant for emergency recovery. If you need it often, something is
  wrong with the acquisition workstation or its software. Contact your Carestream
  support representative to fix the root cause and keep your medical data safe.";

/// One-line description used in lists and result messages
pub fn candidate_label(xray: &LostXray) -> String {
    let mut label = format!(
        "{}, Date Taken: {}",
        xray.full_name(),
        xray.date_taken().format(DISPLAY_TIME_FORMAT)
    );
    if !xray.preview_exists() {
        label.push_str(" (preview missing)");
    }
    label
}

/// Prints the candidates as a numbered table
pub fn print_candidates(candidates: &[LostXray]) {
    println!(
        "{:>3}  {:<30} {:<19}  {}",
        style("#").bold(),
        style("PATIENT").bold(),
        style("DATE TAKEN").bold(),
        style("PREVIEW").bold()
    );
    println!("{}", "-".repeat(72));

    for (index, xray) in candidates.iter().enumerate() {
        let preview = if xray.preview_exists() {
            xray.preview_image_path().display().to_string()
        } else {
            format!("{} (missing)", xray.preview_image_path().display())
        };
        println!(
            "{:>3}  {:<30} {:<19}  {}",
            index + 1,
            xray.full_name(),
            xray.date_taken().format(DISPLAY_TIME_FORMAT).to_string(),
            preview
        );
    }
}

/// Warns about study folders that could not be read
pub fn print_scan_problems(outcome: &ScanOutcome) {
    for failure in outcome.failures() {
        eprintln!("[!] {}", style(failure).yellow());
    }
}

/// Terms, scan, then select-and-recover until the user is done
pub fn run_interactive(service: &mut RecoveryService, skip_terms: bool) -> Result<()> {
    print_banner();
    let theme = ColorfulTheme::default();

    if !skip_terms {
        println!("\n{}\n", TERMS_OF_USE);

        let agreed = Confirm::with_theme(&theme)
            .with_prompt("Do you agree to these terms and wish to search for lost X-rays?")
            .default(false)
            .interact()
            .context("Failed to read the answer")?;

        if !agreed {
            println!("Exiting the program.");
            return Ok(());
        }
    }

    println!("\n{}", style("Searching for lost X-rays...").cyan());
    let outcome = service.scan();

    if !outcome.succeeded() {
        let message = outcome
            .error_message()
            .unwrap_or_else(|| "The scan failed.".to_string());
        println!("\n[!] {}", style(message).red());
        return Ok(());
    }

    print_scan_problems(&outcome);
    let candidates = outcome.into_candidates();

    if candidates.is_empty() {
        println!("\nNo lost X-rays found.");
        return Ok(());
    }

    println!("\n{}\n", style("Lost X-rays found:").green().bold());
    print_candidates(&candidates);
    println!();

    let labels: Vec<String> = candidates.iter().map(candidate_label).collect();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Select an X-ray to recover (Esc to quit)")
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("Failed to select an X-ray")?;

        let Some(index) = selection else {
            break;
        };

        recover_one(service, &candidates[index]);

        let again = Confirm::with_theme(&theme)
            .with_prompt("Recover another X-ray?")
            .default(false)
            .interact()
            .context("Failed to read the answer")?;

        if !again {
            break;
        }
    }

    Ok(())
}

/// Scans and prints the candidates, as a table or as JSON
pub fn run_list(service: &RecoveryService, json: bool) -> Result<()> {
    let outcome = scan_or_bail(service)?;
    print_scan_problems(&outcome);

    if json {
        let rendered = serde_json::to_string_pretty(outcome.candidates())
            .context("Failed to render candidates as JSON")?;
        println!("{}", rendered);
    } else if outcome.candidates().is_empty() {
        println!("No lost X-rays found.");
    } else {
        print_candidates(outcome.candidates());
    }

    Ok(())
}

/// Scans and recovers every candidate
pub fn run_recover_all(service: &mut RecoveryService) -> Result<()> {
    let outcome = scan_or_bail(service)?;
    print_scan_problems(&outcome);
    let candidates = outcome.into_candidates();

    if candidates.is_empty() {
        println!("No lost X-rays found.");
        return Ok(());
    }

    let report = service
        .recover_all(&candidates)
        .context("Failed to prepare the recovery folder")?;

    println!("{}", report.summary());
    for error in &report.errors {
        eprintln!("[!] {}", style(error).yellow());
    }

    if report.failed_files() > 0 {
        bail!("{} X-rays could not be recovered", report.failed_files());
    }
    Ok(())
}

fn scan_or_bail(service: &RecoveryService) -> Result<ScanOutcome> {
    let outcome = service.scan();
    if !outcome.succeeded() {
        bail!(
            "{}",
            outcome
                .error_message()
                .unwrap_or_else(|| "The scan failed.".to_string())
        );
    }
    Ok(outcome)
}

fn recover_one(service: &mut RecoveryService, xray: &LostXray) {
    let label = candidate_label(xray);

    match service.recover(xray) {
        Ok(recovered) => {
            println!(
                "\n{} {}",
                style("Successfully recovered X-ray for:").green().bold(),
                label
            );
            println!("Saved to: {}", recovered.saved_path.display());
            match &recovered.sha256 {
                Some(sha256) => println!("SHA-256:  {}\n", sha256),
                None => println!("SHA-256:  unavailable\n"),
            }
        }
        Err(e) => {
            println!("\n{} {}", style("Failed to recover X-ray for:").red().bold(), label);
            println!("Cause: {}\n", e);
        }
    }
}

fn print_banner() {
    println!();
    println!("{}", style("X-ray Rescue - Lost X-ray Recovery Tool").cyan().bold());
}
