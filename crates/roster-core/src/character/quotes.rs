//! Quote sampling.

use rand::Rng;
use rand::seq::SliceRandom;

/// Maximum number of sayings returned per character.
pub const MAX_QUOTES: usize = 5;

/// Pick up to [`MAX_QUOTES`] sayings in random order.
///
/// Characters without sayings get the three generic lines from
/// [`fallback_quotes`] instead.
pub fn sample_quotes<R: Rng + ?Sized>(
    sayings: &[String],
    full_name: &str,
    rng: &mut R,
) -> Vec<String> {
    if sayings.is_empty() {
        return fallback_quotes(full_name);
    }

    let mut pool = sayings.to_vec();
    pool.shuffle(rng);
    pool.truncate(MAX_QUOTES);
    pool
}

/// Generic lines used when a character has no sayings of their own.
pub fn fallback_quotes(full_name: &str) -> Vec<String> {
    vec![
        format!("Hi, I'm {full_name}."),
        format!("{full_name} says: Welcome to the future!"),
        format!("As {full_name} puts it: that's just the way things are in the future."),
    ]
}
