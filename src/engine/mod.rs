//! Column permutation engine
//!
//! This module implements the swap transformation: for each configured
//! column pair, values are exchanged between the two columns with an
//! independent random permutation applied to one side, breaking the row-wise
//! correlation between the columns while preserving each column's multiset
//! of values.
//!
//! # Swap semantics
//!
//! For a pair `(A, B)` over a table of N rows:
//!
//! 1. If either column is missing, the pair is skipped with a warning.
//! 2. A uniform random permutation of row indices `0..N` is drawn from a
//!    per-pair RNG reseeded off the injected master RNG.
//! 3. `B` is reindexed by the permutation, giving `B'`.
//! 4. `B` is assigned the *original, unpermuted* values of `A`; `A` is
//!    assigned `B'`.
//!
//! The assignment is intentionally asymmetric: after processing, `B` holds
//! exactly the original `A` column in original row order, while `A` holds a
//! shuffled copy of the original `B`. Symmetrizing this (permuting both
//! sides) would change observable behavior and is not what the tool does.
//!
//! Pairs are processed strictly in configuration order. When pairs overlap
//! (say `[a, b]` followed by `[b, c]`), the later pair reads the column as
//! already mutated by the earlier one, so pair order is semantically
//! significant.
//!
//! # Examples
//!
//! ```
//! use colswap::domain::{ColumnPair, Table};
//! use colswap::engine::apply_swaps;
//! use rand::SeedableRng;
//!
//! let mut table = Table::from_rows(
//!     vec!["age".into(), "city".into()],
//!     vec![
//!         vec!["34".into(), "Lyon".into()],
//!         vec!["58".into(), "Oslo".into()],
//!     ],
//! ).unwrap();
//!
//! let pairs = vec![ColumnPair::new("age", "city")];
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! apply_swaps(&mut table, &pairs, &mut rng);
//!
//! // city now holds the original age values, in original row order
//! assert_eq!(table.values("city").unwrap(), &["34", "58"]);
//! ```

use crate::domain::{ColumnPair, Table};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

/// Applies the configured swaps to the table in place
///
/// The engine owns the table for the duration of the call; the same handle
/// is returned to the caller mutated. Columns not named by any pair are left
/// byte-identical, and the row count never changes.
///
/// Each pair shuffles with a private [`StdRng`] seeded from a value drawn
/// off `rng`, so permutations are independent across pairs while a fixed
/// master seed reproduces the entire run.
///
/// Missing columns are never fatal: a pair naming a column absent from the
/// table is skipped with a warning and processing continues, leaving both
/// named columns (where they exist) untouched.
pub fn apply_swaps<R: Rng>(table: &mut Table, pairs: &[ColumnPair], rng: &mut R) {
    for pair in pairs {
        let missing: Vec<&str> = [pair.left.as_str(), pair.right.as_str()]
            .into_iter()
            .filter(|name| !table.contains(name))
            .collect();
        if !missing.is_empty() {
            warn!(
                pair = %pair,
                missing = missing.join(", "),
                "Column(s) not found in the table, skipping pair"
            );
            continue;
        }

        let (left_original, right_original) = match (
            table.values(&pair.left).map(<[String]>::to_vec),
            table.values(&pair.right).map(<[String]>::to_vec),
        ) {
            (Some(left), Some(right)) => (left, right),
            // both checked present above
            _ => continue,
        };

        let mut pair_rng = StdRng::seed_from_u64(rng.gen());
        let mut indices: Vec<usize> = (0..table.num_rows()).collect();
        indices.shuffle(&mut pair_rng);

        let right_permuted: Vec<String> = indices
            .iter()
            .map(|&row_idx| right_original[row_idx].clone())
            .collect();

        // right gets the unpermuted left; left gets the shuffled right
        table.set_values(&pair.right, left_original);
        table.set_values(&pair.left, right_permuted);

        info!(
            left = %pair.left,
            right = %pair.right,
            "Swapped data between columns"
        );
    }
}
