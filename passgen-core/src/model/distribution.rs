use rand::Rng;

use crate::error::{Error, Result};
use crate::model::frequency_table::FrequencyTable;

/// Running sums of the weights of a frequency table.
///
/// `cumulative[i]` is the sum of the weights of entries `0..=i`, so the
/// last element is the total weight. Sampling draws `r` uniformly in
/// `[0, total)` and picks the first index whose running sum exceeds `r`;
/// each index is therefore chosen with probability `weight / total`.
///
/// ## Invariants
/// - Same length and index alignment as the source table
/// - Non-decreasing
/// - Total weight is strictly positive
///
/// The only way to obtain one is [`CumulativeDistribution::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeDistribution {
	cumulative: Vec<u64>,
}

impl CumulativeDistribution {
	/// Builds the running sums of `table`.
	///
	/// # Errors
	/// - [`Error::EmptyDistribution`] if the table has no entries or
	///   every weight is zero
	/// - [`Error::WeightOverflow`] if the total does not fit in a `u64`
	pub fn new(table: &FrequencyTable) -> Result<Self> {
		let mut cumulative = Vec::with_capacity(table.len());
		let mut running: u64 = 0;
		for entry in table.entries() {
			running = running.checked_add(entry.weight).ok_or(Error::WeightOverflow)?;
			cumulative.push(running);
		}

		if running == 0 {
			return Err(Error::EmptyDistribution);
		}

		Ok(Self { cumulative })
	}

	/// Sum of all weights.
	pub fn total(&self) -> u64 {
		// Non-empty by construction
		self.cumulative.last().copied().unwrap_or(0)
	}

	pub fn len(&self) -> usize {
		self.cumulative.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cumulative.is_empty()
	}

	pub fn as_slice(&self) -> &[u64] {
		&self.cumulative
	}

	/// Maps a draw in `[0, total)` to the index of the first running sum
	/// greater than `draw`.
	///
	/// Returns `None` if `draw >= total`.
	pub fn index_of(&self, draw: u64) -> Option<usize> {
		let index = self.cumulative.partition_point(|&sum| sum <= draw);
		(index < self.cumulative.len()).then_some(index)
	}

	/// Draws a weighted random index.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
		let draw = rng.random_range(0..self.total());
		// draw < total, so a matching index always exists
		self.index_of(draw).unwrap_or(self.cumulative.len() - 1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::frequency_table::FrequencyEntry;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn table(weights: &[(&str, u64)]) -> FrequencyTable {
		weights.iter().map(|(c, w)| FrequencyEntry::new(*c, *w)).collect()
	}

	#[test]
	fn running_sums() {
		let dist = CumulativeDistribution::new(&table(&[("a", 1), ("b", 3), ("c", 2)])).unwrap();
		assert_eq!(dist.as_slice(), &[1, 4, 6]);
		assert_eq!(dist.total(), 6);
		assert_eq!(dist.len(), 3);
	}

	#[test]
	fn index_of_picks_first_sum_above_draw() {
		let dist = CumulativeDistribution::new(&table(&[("a", 1), ("b", 3), ("c", 2)])).unwrap();
		let picks: Vec<Option<usize>> = (0..7).map(|d| dist.index_of(d)).collect();
		assert_eq!(picks, vec![Some(0), Some(1), Some(1), Some(1), Some(2), Some(2), None]);
	}

	#[test]
	fn zero_weights_are_never_picked() {
		let dist = CumulativeDistribution::new(&table(&[("a", 0), ("b", 2), ("c", 0), ("d", 1)])).unwrap();
		assert_eq!(dist.index_of(0), Some(1));
		assert_eq!(dist.index_of(1), Some(1));
		assert_eq!(dist.index_of(2), Some(3));
	}

	#[test]
	fn empty_table_is_rejected() {
		let err = CumulativeDistribution::new(&FrequencyTable::default()).unwrap_err();
		assert!(matches!(err, Error::EmptyDistribution));
	}

	#[test]
	fn all_zero_weights_are_rejected() {
		let err = CumulativeDistribution::new(&table(&[("a", 0), ("b", 0)])).unwrap_err();
		assert!(matches!(err, Error::EmptyDistribution));
	}

	#[test]
	fn built_distribution_always_samples_in_range() {
		let dist = CumulativeDistribution::new(&table(&[("a", 0), ("b", 0), ("c", 1), ("d", 0)])).unwrap();
		assert!(dist.total() > 0);
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..1_000 {
			assert_eq!(dist.sample(&mut rng), 2);
		}
	}

	#[test]
	fn overflow_is_rejected() {
		let err = CumulativeDistribution::new(&table(&[("a", u64::MAX), ("b", 1)])).unwrap_err();
		assert!(matches!(err, Error::WeightOverflow));
	}

	#[test]
	fn sampling_follows_weights() {
		let dist = CumulativeDistribution::new(&table(&[("a", 1), ("b", 99)])).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let draws = 100_000;
		let hits = (0..draws).filter(|_| dist.sample(&mut rng) == 0).count();
		let ratio = hits as f64 / draws as f64;
		assert!((0.007..0.013).contains(&ratio), "ratio = {ratio}");
	}
}
