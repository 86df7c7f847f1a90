// Manuscript review — trait-based seam to the external language model.
//
// The ManuscriptReviewer trait is what the CLI and web server depend on.
// HttpReviewer talks to any OpenAI-compatible chat completions endpoint,
// so the hosted model can change without touching callers.

pub mod http;
pub mod traits;
