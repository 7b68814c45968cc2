use crate::domain::historical_pool::HistoricalPool;
use crate::services::sampler::ThroughputSampler;

/// Sums `periods_per_round` independent draws (with replacement) into one
/// round total.
pub fn aggregate_round<S: ThroughputSampler + ?Sized>(
    sampler: &mut S,
    pool: &HistoricalPool,
    periods_per_round: usize,
) -> u64 {
    (0..periods_per_round)
        .map(|_| u64::from(sampler.draw(pool)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedSampler;

    #[test]
    fn aggregate_round_sums_each_draw() {
        let pool = HistoricalPool::new(vec![1, 10, 100]).unwrap();
        let mut sampler = ScriptedSampler::new(vec![0, 2, 2, 1]);
        assert_eq!(aggregate_round(&mut sampler, &pool, 4), 211);
        assert_eq!(sampler.draws(), 4);
    }

    #[test]
    fn aggregate_round_allows_same_period_twice() {
        let pool = HistoricalPool::new(vec![5, 7]).unwrap();
        let mut sampler = ScriptedSampler::new(vec![1]);
        assert_eq!(aggregate_round(&mut sampler, &pool, 3), 21);
    }

    #[test]
    fn aggregate_round_does_not_overflow_u32() {
        let pool = HistoricalPool::new(vec![u32::MAX]).unwrap();
        let mut sampler = ScriptedSampler::new(vec![0]);
        assert_eq!(
            aggregate_round(&mut sampler, &pool, 3),
            3 * u64::from(u32::MAX)
        );
    }
}
