// Reviewer prompt construction.
//
// The prompt is plain text handed to an external language-model reviewer.
// Task and manuscript are embedded verbatim. When the submission is flagged,
// an extra note quotes the paste percentage and asks the reviewer to weigh
// authenticity. Nothing here calls the reviewer.

use crate::integrity::score::{self, IntegrityThresholds};
use crate::models::{IntegrityMetadata, SubmissionEvaluation, SubmissionTelemetry};

/// Heading that opens the flagged-submission note.
pub const INTEGRITY_NOTE_HEADING: &str = "INTEGRITY NOTE:";

/// Render the review prompt for one submission.
pub fn build_review_prompt(task: &str, manuscript_text: &str, integrity: &IntegrityMetadata) -> String {
    let mut prompt = format!(
        "You are a supportive writing mentor reviewing a manuscript submitted to a \
         non-profit publishing program for emerging authors.\n\
         \n\
         ASSIGNMENT:\n\
         {task}\n\
         \n\
         SUBMISSION:\n\
         {manuscript_text}\n\
         \n\
         Give constructive feedback on how well the submission answers the assignment. \
         Comment on voice, structure and clarity, and suggest two or three concrete revisions."
    );

    if integrity.is_flagged {
        let percent = integrity.paste_ratio * 100.0;
        prompt.push_str(&format!(
            "\n\n{INTEGRITY_NOTE_HEADING} {percent:.0}% of this submission was pasted rather \
             than typed. Consider whether the writing reflects the author's own voice and \
             gently encourage original work in your feedback."
        ));
    }

    prompt
}

/// Score a submission and build its prompt in one step.
pub fn evaluate_submission(
    submission: &SubmissionTelemetry,
    thresholds: &IntegrityThresholds,
) -> SubmissionEvaluation {
    let integrity = score::calculate_integrity(
        submission.paste_count,
        submission.total_characters,
        thresholds,
    );
    let prompt = build_review_prompt(&submission.task, &submission.manuscript_text, &integrity);
    SubmissionEvaluation { integrity, prompt }
}
