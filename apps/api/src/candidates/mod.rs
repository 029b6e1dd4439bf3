// Collaborators around the analysis core: session pool, results file,
// report export, file upload, demo data, and their HTTP handlers.
// All file and network I/O lives here; `analysis` stays pure.

pub mod demo;
pub mod exports;
pub mod handlers;
pub mod persistence;
pub mod pool;
pub mod upload;
