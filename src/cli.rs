use rand::{Rng, RngExt};

use crate::error::BatchError;

/// Number of contacts generated when no count argument is given.
pub const DEFAULT_COUNT: usize = 100;

const SUFFIX_LEN: usize = 5;

/// Resolves the contact count from the command-line arguments, with the
/// program name already stripped.
///
/// No argument yields [`DEFAULT_COUNT`]. Arguments beyond the first are
/// ignored. A non-integer or non-positive first argument is an error, and
/// the binary exits with status 1.
pub fn resolve_count<I>(args: I) -> Result<usize, BatchError>
where
    I: IntoIterator<Item = String>,
{
    match args.into_iter().next() {
        None => Ok(DEFAULT_COUNT),
        Some(raw) => {
            let count: i64 = match raw.parse() {
                Ok(value) => value,
                Err(_) => return Err(BatchError::InvalidArgument(raw)),
            };
            if count < 1 {
                return Err(BatchError::InvalidCount(count));
            }
            Ok(count as usize)
        }
    }
}

/// Builds the output file name, `test_contacts_<count>_<suffix>.csv`.
///
/// The suffix is five random lowercase letters, so repeated runs with the
/// same count land in distinct files. Collisions are not checked; the
/// suffix exists to make them unlikely, not impossible.
pub fn output_file_name<R: Rng>(count: usize, rng: &mut R) -> String {
    format!("test_contacts_{}_{}.csv", count, random_suffix(rng))
}

fn random_suffix<R: Rng>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}
