// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - http: Checks one cell's URL and classifies the outcome
// - redirect: Follows redirects while recording each hop
// - result: The `CheckResult` type every check produces
// =============================================================================

mod http;
mod redirect;
pub mod result;

pub use http::LinkChecker;
pub use result::CheckResult;
