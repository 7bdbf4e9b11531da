// Public API exports
pub mod encoding;
pub mod fragments;
pub mod injector;
pub mod report;
pub mod scanner;

// Re-export main types for convenience
pub use encoding::{SourceText, TextEncoding, read_text, write_text};
pub use fragments::{AUTH_MARKER, NAV_FRAGMENT, SCRIPT_FRAGMENT, SCRIPT_MARKER};
pub use injector::{InjectError, Injector, InjectorBuilder, Outcome};
pub use report::{FileReport, RunSummary};
pub use scanner::{HTML_EXTENSION, TEST_FIXTURE_PREFIX, list_candidates};
