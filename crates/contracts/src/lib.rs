//! Contract bindings and compiled artifacts for the Validator and Aggregator
//! contracts. The contract sources and their compilation are owned by the
//! contracts toolchain; this crate only reads its output.
pub mod artifact;
pub mod bindings;

pub use {
    artifact::{Artifact, Artifacts},
    bindings::{AGGREGATOR, Aggregator, LinkedAggregator, VALIDATOR, Validator, creation_code},
};
