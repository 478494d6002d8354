//! Command handlers that delegate to the core catalog pipeline.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(catalog: &Catalog, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call catalog pipeline operations
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Read manifest files directly
//! - Contain filter or sort logic

pub mod list;
pub mod show;
pub mod sources;
