//! Motivational quote selection for the check-in view.

use rand::seq::SliceRandom;

/// Pick one quote at random, or `None` for an empty pool.
pub fn pick(quotes: &[String]) -> Option<&str> {
    let mut rng = rand::thread_rng();
    quotes.choose(&mut rng).map(String::as_str)
}
