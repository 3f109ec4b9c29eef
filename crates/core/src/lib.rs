//! Domain types and pure logic for the cosplay suggestion pipeline.
//!
//! Everything in this crate is free of I/O: prompt composition, response
//! parsing, attribute resolution, and currency conversion. External
//! collaborators (text oracle, marketplace search, account lookup) are
//! expressed as `async_trait` seams so the pipeline can be driven by real
//! HTTP clients in production and by fakes in tests.

pub mod attributes;
pub mod currency;
pub mod error;
pub mod oracle;
pub mod parser;
pub mod product;
pub mod prompt;
pub mod suggestion;
pub mod types;
