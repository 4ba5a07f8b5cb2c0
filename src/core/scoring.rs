//! Scoring rule for accepted guesses

/// Extra points for a guess that uses every letter in the pool
pub const FULL_POOL_BONUS: usize = 10;

/// Points earned by an accepted guess
///
/// One point per letter, plus [`FULL_POOL_BONUS`] when the guess is exactly as
/// long as the pool.
///
/// # Examples
/// ```
/// use unscramble::core::score_delta;
///
/// assert_eq!(score_delta(3, 5), 3);
/// assert_eq!(score_delta(5, 5), 15);
/// ```
#[inline]
#[must_use]
pub const fn score_delta(guess_length: usize, pool_length: usize) -> usize {
    if guess_length == pool_length {
        guess_length + FULL_POOL_BONUS
    } else {
        guess_length
    }
}
