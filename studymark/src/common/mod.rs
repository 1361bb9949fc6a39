//! Contains logic for mapping between different document representations.

pub mod flat_to_nested;
pub mod nested_to_flat;
