// Library root
// -----------
// This crate exposes a small library surface for the CrystalIA oracle. The
// binary (`main.rs`) wires these modules into the interactive terminal form.
//
// Module responsibilities:
// - `config`: Locates the secrets file and resolves the Google API key,
//   falling back to a masked prompt.
// - `prompt`: Builds the fortune-teller prompt from the user's answers.
// - `api`: Talks to the hosted Gemini model (one blocking call per
//   submission).
// - `oracle`: Drives a single submission from validation to the rendered
//   answer, independent of the terminal.
// - `render`: Turns the model's markdown and the status messages into styled
//   terminal text.
// - `ui`: Implements the terminal form and delegates to the modules above.
// - `logging`: Diagnostic tracing to stderr.
//
// Keeping `oracle` free of terminal I/O makes the submission rules testable
// with a stub model.
pub mod api;
pub mod config;
pub mod logging;
pub mod oracle;
pub mod prompt;
pub mod render;
pub mod ui;
