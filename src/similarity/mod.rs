//! Partition-similarity measures over cluster-label assignments.

mod comembership;

pub use comembership::{similarity, similarity_detailed, ComembershipSums};
