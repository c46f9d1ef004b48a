//! Sample statistics over every value stored in a [`Tree`].
//!
//! Values are read through the tree's in-order traversal and converted to `f64`, so all arithmetic
//! is done in double precision regardless of the stored type.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::builder::build_balanced;
//! use balanced_bst::stats;
//!
//! let tree = build_balanced(&[10, 20, 30, 40, 50, 60]);
//!
//! assert_eq!(stats::mean(&tree).unwrap(), 35.0);
//! assert!((stats::standard_deviation(&tree).unwrap() - 18.708).abs() < 1e-3);
//! ```

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::tree::Tree;

/// Arithmetic mean of the values in `tree`.
///
/// # Errors
///
/// [`Error::InvalidOperation`] if the tree is empty.
pub fn mean<T>(tree: &Tree<T>) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    require(tree, "mean", 1)?;
    Ok(sum(tree) / tree.len() as f64)
}

/// Sample variance of the values in `tree`: the sum of squared deviations from the mean divided by
/// `n - 1`.
///
/// # Errors
///
/// [`Error::InvalidOperation`] if the tree holds fewer than two values, since the divisor would be
/// zero.
#[instrument(level = "debug", skip(tree), fields(n = tree.len()))]
pub fn variance<T>(tree: &Tree<T>) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    require(tree, "sample variance", 2)?;

    let n = tree.len() as f64;
    let mean = sum(tree) / n;
    let squared_deviations: f64 = values(tree).map(|x| (x - mean).powi(2)).sum();
    let variance = squared_deviations / (n - 1.0);

    debug!(mean, variance, "computed sample variance");
    Ok(variance)
}

/// Sample standard deviation of the values in `tree`, i.e. the square root of [`variance`].
///
/// # Errors
///
/// [`Error::InvalidOperation`] if the tree holds fewer than two values.
///
/// # Examples
///
/// ```
/// use balanced_bst::builder::build_balanced;
/// use balanced_bst::error::Error;
/// use balanced_bst::stats::standard_deviation;
///
/// let tree = build_balanced(&[42]);
///
/// assert!(matches!(
///     standard_deviation(&tree),
///     Err(Error::InvalidOperation { found: 1, .. })
/// ));
/// ```
pub fn standard_deviation<T>(tree: &Tree<T>) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    variance(tree).map(f64::sqrt)
}

fn require<T>(tree: &Tree<T>, operation: &'static str, required: usize) -> Result<()> {
    if tree.len() < required {
        return Err(Error::InvalidOperation {
            operation,
            required,
            found: tree.len(),
        });
    }
    Ok(())
}

fn values<T>(tree: &Tree<T>) -> impl Iterator<Item = f64> + '_
where
    T: Copy + Into<f64>,
{
    tree.iter().map(|&x| x.into())
}

fn sum<T>(tree: &Tree<T>) -> f64
where
    T: Copy + Into<f64>,
{
    values(tree).sum()
}
