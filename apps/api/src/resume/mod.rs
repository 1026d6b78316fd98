// Resume Analyzer: upload checks plus a fixed mock analysis.
// File contents are never read; only the name and size matter.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod upload;
