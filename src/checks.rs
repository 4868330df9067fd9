//! Post-sort correctness checks.

use thiserror::Error;

/// Why a sorted output was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("output has {found} elements, input had {expected}")]
    LengthMismatch { found: usize, expected: usize },
    #[error("not sorted at index {index}: {previous} precedes {value}")]
    Unsorted {
        index: usize,
        previous: i32,
        value: i32,
    },
    #[error("first mismatch at index {index}: got {found}, expected {expected}")]
    Mismatch {
        index: usize,
        found: i32,
        expected: i32,
    },
}

/// Index of the first element smaller than its predecessor, if any.
pub fn first_unsorted(v: &[i32]) -> Option<usize> {
    v.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}

pub fn is_sorted(v: &[i32]) -> bool {
    first_unsorted(v).is_none()
}

/// Check that `output` is the sorted permutation of `original`, using the standard
/// library's unstable sort as the reference.
pub fn verify(output: &[i32], original: &[i32]) -> Result<(), VerifyError> {
    verify_with(output, original, |v| v.sort_unstable())
}

/// [`verify`] with a caller-provided reference sort.
///
/// Inputs of zero or one element are accepted without running `oracle`.
pub fn verify_with(
    output: &[i32],
    original: &[i32],
    oracle: impl FnOnce(&mut [i32]),
) -> Result<(), VerifyError> {
    if output.len() != original.len() {
        return Err(VerifyError::LengthMismatch {
            found: output.len(),
            expected: original.len(),
        });
    }
    if output.len() <= 1 {
        return Ok(());
    }
    if let Some(index) = first_unsorted(output) {
        return Err(VerifyError::Unsorted {
            index,
            previous: output[index - 1],
            value: output[index],
        });
    }
    let mut expected = Vec::new();
    if expected.try_reserve_exact(original.len()).is_err() {
        log::warn!(
            "No memory for a {}-element reference copy; only the order check was applied",
            original.len()
        );
        return Ok(());
    }
    expected.extend_from_slice(original);
    oracle(&mut expected);
    match output.iter().zip(&expected).position(|(a, b)| a != b) {
        Some(index) => Err(VerifyError::Mismatch {
            index,
            found: output[index],
            expected: expected[index],
        }),
        None => Ok(()),
    }
}
