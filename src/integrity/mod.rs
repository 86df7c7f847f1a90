// Submission integrity — paste-ratio scoring and the reviewer prompt.
//
// The editor records how many characters were pasted versus the total
// submitted. A high ratio is a signal for the reviewer to look closer,
// not a verdict.

pub mod prompt;
pub mod score;
