//! Pairwise agreement between cluster-label assignments.
//!
//! This crate scores how well two clusterings of the same items agree,
//! using the co-membership correlation of Ben-Hur, Elisseeff and Guyon
//! (2004). It is the pairwise kernel of a clustering-stability procedure:
//! a driver repeatedly subsamples a dataset, clusters each subsample, and
//! calls [`similarity`] on pairs of resulting label vectors to measure how
//! stable the clustering structure is.
//!
//! The crate deliberately covers only the pairwise score. Producing label
//! vectors, choosing subsamples, and aggregating scores across many pairs
//! belong to the caller.
//!
//! # Example
//!
//! ```
//! use cluster_agreement::similarity;
//!
//! // Two clusterings that induce the same partition agree perfectly.
//! let score = similarity(&[1, 1, 2, 2], &[7, 7, 9, 9])?;
//! assert_eq!(score, 1.0);
//! # Ok::<(), cluster_agreement::AgreementError>(())
//! ```

pub mod error;
pub mod similarity;

// Re-exports for convenience
pub use error::{AgreementError, AgreementResult};
pub use similarity::{similarity, similarity_detailed, ComembershipSums};
