// Composition tests — verifying the pieces chain together the way the
// request layer uses them:
//   JSON profiles -> sanitize -> JSON response
//   telemetry -> integrity -> prompt -> reviewer
// without any network calls.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use inkguard::config::Config;
use inkguard::integrity::prompt::{evaluate_submission, INTEGRITY_NOTE_HEADING};
use inkguard::models::SubmissionTelemetry;
use inkguard::review::traits::{ManuscriptReviewer, ReviewFeedback};
use inkguard::sanitize::profile::{parse_profiles, sanitize_profiles};

// ============================================================
// JSON in, sanitized JSON out
// ============================================================

#[test]
fn mixed_roster_from_json() {
    let raw = r#"[
        {"id": 101, "firstName": "Lena", "lastName": "Okafor",
         "email": "lena.okafor@school.example", "dateOfBirth": "2012-03-30",
         "isMinor": true, "penName": "L. O. Writes"},
        {"id": "ad-7", "firstName": "Marcus", "lastName": "Hale",
         "email": "marcus@example.com", "isMinor": false,
         "profilePhoto": "photos/marcus.png"},
        {"id": 102, "firstName": "  ", "lastName": "", "isMinor": true}
    ]"#;

    let config = Config::default();
    let profiles = parse_profiles(raw).unwrap();
    let sanitized = sanitize_profiles(&profiles, &config.avatar_pool);
    let out = serde_json::to_string(&sanitized).unwrap();

    assert_eq!(sanitized.len(), 3);
    assert!(!out.contains("lena.okafor@school.example"));
    assert!(!out.contains("2012-03-30"));
    assert!(!out.contains("Okafor"));
    assert!(!out.contains("marcus@example.com"));

    assert_eq!(sanitized[0].display_name, "Lena O.");
    assert_eq!(sanitized[0].pen_name.as_deref(), Some("L. O. Writes"));
    assert_eq!(sanitized[1].display_name, "Marcus Hale");
    assert_eq!(sanitized[1].avatar, "photos/marcus.png");
    assert_eq!(sanitized[2].display_name, "Author");
}

#[test]
fn sanitizing_twice_gives_same_output() {
    let raw = r#"[{"id": 55, "firstName": "Ivy", "lastName": "Chen", "isMinor": true}]"#;
    let config = Config::default();
    let profiles = parse_profiles(raw).unwrap();
    assert_eq!(
        sanitize_profiles(&profiles, &config.avatar_pool),
        sanitize_profiles(&profiles, &config.avatar_pool)
    );
}

// ============================================================
// Telemetry -> prompt -> reviewer
// ============================================================

/// Reviewer that records the prompt it was sent.
struct RecordingReviewer {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl ManuscriptReviewer for RecordingReviewer {
    async fn review(&self, prompt: &str) -> Result<ReviewFeedback> {
        self.seen.lock().unwrap().push(prompt.to_string());
        Ok(ReviewFeedback {
            model: "recording".to_string(),
            content: "Strong opening image.".to_string(),
            reviewed_at: "2026-01-01T00:00:00Z".to_string(),
        })
    }
}

#[tokio::test]
async fn flagged_submission_reaches_reviewer_with_note() {
    let submission = SubmissionTelemetry {
        task: "Write about a place you love".to_string(),
        manuscript_text: "The lake at dawn is silver and quiet.".to_string(),
        paste_count: 900,
        total_characters: 1000,
    };
    let config = Config::default();
    let evaluation = evaluate_submission(&submission, &config.thresholds);
    assert!(evaluation.integrity.is_flagged);

    let reviewer = RecordingReviewer {
        seen: Mutex::new(Vec::new()),
    };
    let feedback = reviewer.review(&evaluation.prompt).await.unwrap();
    assert_eq!(feedback.content, "Strong opening image.");

    let seen = reviewer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains(INTEGRITY_NOTE_HEADING));
    assert!(seen[0].contains("90% of this submission"));
    assert!(seen[0].contains("The lake at dawn is silver and quiet."));
}

#[test]
fn typed_submission_has_clean_prompt() {
    let submission = SubmissionTelemetry {
        task: "Describe a friend".to_string(),
        manuscript_text: "Jo laughs like a kettle.".to_string(),
        paste_count: 3,
        total_characters: 500,
    };
    let evaluation = evaluate_submission(&submission, &Config::default().thresholds);
    assert_eq!(evaluation.integrity.paste_ratio, 0.01);
    assert!(!evaluation.prompt.contains(INTEGRITY_NOTE_HEADING));
}
