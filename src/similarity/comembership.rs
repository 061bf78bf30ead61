//! Co-membership correlation between two cluster-label assignments.
//!
//! Implements the partition-similarity measure of Ben-Hur, Elisseeff and
//! Guyon (2004). Each label vector `l` over `q` items induces a `q x q`
//! boolean co-membership matrix `C` with `C[i][j] = 1` iff `l[i] == l[j]`.
//! The similarity between two label vectors is the normalized inner product
//! of their induced matrices:
//!
//! ```text
//! sim(l1, l2) = <C1, C2> / sqrt(<C1, C1> * <C2, C2>)
//! ```
//!
//! The matrices are never materialized. Each inner product decomposes into a
//! sum of 0/1 pair comparisons, so the scorer accumulates just three running
//! sums over the strictly-upper-triangle index pairs, doubling every
//! contribution to account for matrix symmetry. O(q^2) time, O(1) extra
//! space.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{AgreementError, AgreementResult};

/// Running dot products over two implicit co-membership matrices.
///
/// Stores the three sums needed for the correlation: the self-products of
/// each matrix and their cross-product. Diagonal entries are excluded by
/// construction (only pairs with `i < j` are visited), and each visited pair
/// is counted twice to stand in for its symmetric mirror entry.
///
/// # Example
///
/// ```
/// use cluster_agreement::similarity::ComembershipSums;
///
/// let l1 = [1, 1, 2, 2];
/// let l2 = [1, 2, 1, 2];
/// let sums = ComembershipSums::accumulate(&l1, &l2).unwrap();
///
/// // l1 co-members pairs (0,1) and (2,3); l2 co-members none.
/// assert_eq!(sums.dot_c1c1, 4.0);
/// assert_eq!(sums.dot_c2c2, 0.0);
/// assert_eq!(sums.dot_c1c2, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComembershipSums {
    /// Inner product of the first matrix with itself.
    pub dot_c1c1: f64,
    /// Inner product of the second matrix with itself.
    pub dot_c2c2: f64,
    /// Inner product between the two matrices.
    pub dot_c1c2: f64,
}

impl ComembershipSums {
    /// Accumulate the sums over every unordered pair of distinct items.
    ///
    /// Generic over any equality-comparable label type: cluster labels are
    /// categorical identifiers, so only equality matters, never ordinal
    /// value or numeric representation.
    ///
    /// # Arguments
    ///
    /// * `l1` - Cluster labels for the first assignment
    /// * `l2` - Cluster labels for the second assignment, same items in the
    ///   same order
    ///
    /// # Errors
    ///
    /// Returns [`AgreementError::LengthMismatch`] when the slices differ in
    /// length. Lengths 0 and 1 are valid and yield all-zero sums.
    pub fn accumulate<T: PartialEq>(l1: &[T], l2: &[T]) -> AgreementResult<Self> {
        if l1.len() != l2.len() {
            return Err(AgreementError::length_mismatch(l1.len(), l2.len()));
        }

        let q = l1.len();
        let mut sums = Self::default();

        // Only pairs with i < j are visited; record_pair doubles each
        // contribution for the mirror entry (j, i).
        for i in 0..q {
            for j in (i + 1)..q {
                sums.record_pair(l1[i] == l1[j], l2[i] == l2[j]);
            }
        }

        Ok(sums)
    }

    /// Fold one unordered item pair into the sums.
    ///
    /// # Arguments
    ///
    /// * `same_1` - Whether the pair is co-membered in the first assignment
    /// * `same_2` - Whether the pair is co-membered in the second assignment
    pub fn record_pair(&mut self, same_1: bool, same_2: bool) {
        if same_1 {
            self.dot_c1c1 += 2.0;
        }
        if same_2 {
            self.dot_c2c2 += 2.0;
        }
        if same_1 && same_2 {
            self.dot_c1c2 += 2.0;
        }
    }

    /// Compute the correlation from the accumulated sums.
    ///
    /// `dot_c1c2 / max(1.0, sqrt(dot_c1c1 * dot_c2c2))`. The `max(1.0, ..)`
    /// guard keeps the denominator alive when one assignment has no
    /// co-membered pair at all (every item a singleton cluster), turning the
    /// degenerate `0/0` case into `0.0`. The result is always finite and in
    /// `[0.0, 1.0]`, since `dot_c1c2 <= min(dot_c1c1, dot_c2c2)`.
    pub fn correlation(&self) -> f64 {
        self.dot_c1c2 / f64::max(1.0, (self.dot_c1c1 * self.dot_c2c2).sqrt())
    }

    /// Check whether the denominator guard is what keeps this finite.
    ///
    /// Returns true when at least one assignment has no co-membered pair,
    /// in which case [`correlation`](Self::correlation) is exactly `0.0`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.dot_c1c1 == 0.0 || self.dot_c2c2 == 0.0
    }
}

/// Compute the co-membership correlation between two label vectors.
///
/// Pure and stateless; each call is independent. The score is `1.0` for
/// identical (non-degenerate) partitions, `0.0` for fully discordant ones,
/// and always within `[0.0, 1.0]`.
///
/// # Arguments
///
/// * `l1` - Cluster labels for the first assignment
/// * `l2` - Cluster labels for the second assignment, same items in the
///   same order
///
/// # Errors
///
/// Returns [`AgreementError::LengthMismatch`] when the slices differ in
/// length.
///
/// # Example
///
/// ```
/// use cluster_agreement::similarity::similarity;
///
/// let score = similarity(&[1, 1, 2, 2], &[1, 1, 2, 2]).unwrap();
/// assert_eq!(score, 1.0);
///
/// let score = similarity(&[1, 1, 2, 2], &[1, 2, 1, 2]).unwrap();
/// assert_eq!(score, 0.0);
/// ```
pub fn similarity<T: PartialEq>(l1: &[T], l2: &[T]) -> AgreementResult<f64> {
    let (score, _) = similarity_detailed(l1, l2)?;
    Ok(score)
}

/// Compute the correlation along with its accumulated sums.
///
/// Same computation as [`similarity`], also returning the
/// [`ComembershipSums`] breakdown for callers that report or persist the
/// raw dot products.
pub fn similarity_detailed<T: PartialEq>(
    l1: &[T],
    l2: &[T],
) -> AgreementResult<(f64, ComembershipSums)> {
    let sums = ComembershipSums::accumulate(l1, l2)?;
    let score = sums.correlation();

    trace!(
        q = l1.len(),
        score,
        degenerate = sums.is_degenerate(),
        "computed co-membership correlation"
    );

    Ok((score, sums))
}
