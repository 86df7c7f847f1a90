// Colored terminal output for sanitized profiles and integrity reports.

use colored::Colorize;

use crate::models::{IntegrityMetadata, SanitizedAuthorProfile};
use crate::output::truncate_chars;
use crate::review::traits::ReviewFeedback;

/// Display sanitized profiles as a table.
pub fn display_profiles(profiles: &[SanitizedAuthorProfile]) {
    if profiles.is_empty() {
        println!("No profiles in input.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Sanitized Profiles ({}) ===", profiles.len()).bold()
    );
    println!();

    println!(
        "  {:<12} {:<6} {:<28} {:<14} {:<20}",
        "Id".dimmed(),
        "Avatar".dimmed(),
        "Display name".dimmed(),
        "Label".dimmed(),
        "Pen name".dimmed(),
    );
    println!("  {}", "-".repeat(82).dimmed());

    for profile in profiles {
        let label = if profile.is_minor {
            profile.age_display.as_str().cyan()
        } else {
            profile.age_display.as_str().normal()
        };
        println!(
            "  {:<12} {:<6} {:<28} {:<14} {:<20}",
            truncate_chars(&profile.id.to_string(), 12),
            truncate_chars(&profile.avatar, 4),
            truncate_chars(&profile.display_name, 28),
            label,
            profile.pen_name.as_deref().unwrap_or("-"),
        );
    }

    let minors = profiles.iter().filter(|p| p.is_minor).count();
    println!();
    if minors > 0 {
        println!("  {} {} youth profiles redacted", "*".cyan(), minors);
    }
}

/// Display integrity metadata for one submission.
pub fn display_integrity(integrity: &IntegrityMetadata) {
    println!("\n{}", "=== Submission Integrity ===".bold());
    println!("  Pasted characters: {}", integrity.paste_count);
    println!("  Total characters:  {}", integrity.total_characters);
    println!("  Paste ratio:       {:.2}", integrity.paste_ratio);

    if integrity.is_flagged {
        println!("  Status:            {}", "FLAGGED".red().bold());
    } else {
        println!("  Status:            {}", "ok".green());
    }
}

/// Display reviewer feedback.
pub fn display_feedback(feedback: &ReviewFeedback) {
    println!(
        "\n{}",
        format!("=== Review ({}) ===", feedback.model).bold()
    );
    println!("{}", feedback.content);
    println!("\n{}", format!("Reviewed at {}", feedback.reviewed_at).dimmed());
}
