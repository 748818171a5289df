//! Fair spawn-pair sampling by rejection against the mirrored cell

use log::{debug, warn};
use rand::Rng;

use crate::{
    error::MapError,
    grid::{distance_sq, GridPos, MapDims},
};

/// Starting cells for the two players. `p2` is always the mirror of `p1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPair {
    pub p1: GridPos,
    pub p2: GridPos,
}

impl SpawnPair {
    pub fn distance_sq(&self) -> u64 {
        distance_sq(self.p1, self.p2)
    }

    /// True when the pair lies on the map, is mirrored and is far enough apart.
    pub fn is_fair(&self, dims: MapDims) -> bool {
        dims.contains(self.p1)
            && dims.contains(self.p2)
            && dims.mirror(self.p1) == self.p2
            && self.distance_sq() >= min_spawn_distance_sq(dims)
    }
}

/// `(width / 2)²` with the half-width floored, so a 1-wide map has threshold 0.
pub fn min_spawn_distance_sq(dims: MapDims) -> u64 {
    let half = u64::from(dims.width() / 2);
    half * half
}

/// Draws random cells until one sits far enough from its own mirror.
///
/// The corner cell always qualifies, so for valid dimensions the acceptance
/// probability is bounded away from zero and the cap only guards against
/// misuse.
pub fn sample_spawn_pair<R: Rng + ?Sized>(
    dims: MapDims,
    max_attempts: u32,
    rng: &mut R,
) -> Result<SpawnPair, MapError> {
    sample_spawn_pair_with(dims, max_attempts, || {
        let x = rng.gen_range(0..dims.width());
        let y = rng.gen_range(0..dims.height());
        GridPos::new(x, y)
    })
}

pub(crate) fn sample_spawn_pair_with(
    dims: MapDims,
    max_attempts: u32,
    mut draw: impl FnMut() -> GridPos,
) -> Result<SpawnPair, MapError> {
    if max_attempts == 0 {
        return Err(MapError::InvalidSpawnAttempts);
    }

    let threshold = min_spawn_distance_sq(dims);
    for attempt in 1..=max_attempts {
        let p1 = draw();
        debug_assert!(dims.contains(p1), "spawn draw {p1:?} out of bounds");
        let p2 = dims.mirror(p1);
        if distance_sq(p1, p2) >= threshold {
            debug!("spawn pair {p1:?} / {p2:?} accepted after {attempt} draw(s)");
            return Ok(SpawnPair { p1, p2 });
        }
    }

    warn!(
        "spawn sampling gave up after {max_attempts} draws on a {}x{} map",
        dims.width(),
        dims.height()
    );
    Err(MapError::SpawnAttemptsExhausted {
        attempts: max_attempts,
        width: dims.width(),
        height: dims.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scripted(points: &[(u32, u32)]) -> impl FnMut() -> GridPos + '_ {
        let mut iter = points.iter();
        move || {
            let &(x, y) = iter.next().expect("script ran out of points");
            GridPos::new(x, y)
        }
    }

    #[test]
    fn test_accepts_on_first_draw() {
        let dims = MapDims::new(10, 8).unwrap();
        let mut calls = 0;
        let mut inner = scripted(&[(0, 0)]);
        let pair = sample_spawn_pair_with(dims, 100, || {
            calls += 1;
            inner()
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(pair.p1, GridPos::new(0, 0));
        assert_eq!(pair.p2, GridPos::new(9, 7));
    }

    #[test]
    fn test_retries_until_far_enough() {
        let dims = MapDims::new(10, 8).unwrap();
        // (5,4) mirrors to (4,3): d² = 2 < 25, rejected
        // (4,4) mirrors to (5,3): d² = 2 < 25, rejected
        // (1,6) mirrors to (8,1): d² = 74, accepted
        let mut calls = 0;
        let mut inner = scripted(&[(5, 4), (4, 4), (1, 6), (0, 0)]);
        let pair = sample_spawn_pair_with(dims, 100, || {
            calls += 1;
            inner()
        })
        .unwrap();
        assert_eq!(calls, 3);
        assert_eq!(pair.p1, GridPos::new(1, 6));
        assert_eq!(pair.p2, GridPos::new(8, 1));
        assert!(pair.is_fair(dims));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let dims = MapDims::new(10, 1).unwrap();
        // (2,0) mirrors to (7,0): d² = 25 == (10/2)²
        let pair = sample_spawn_pair_with(dims, 1, scripted(&[(2, 0)])).unwrap();
        assert_eq!(pair.distance_sq(), 25);
    }

    #[test]
    fn test_exhaustion_reports_error() {
        let dims = MapDims::new(10, 8).unwrap();
        let err = sample_spawn_pair_with(dims, 2, scripted(&[(5, 4), (4, 3), (0, 0)]))
            .unwrap_err();
        assert_eq!(
            err,
            MapError::SpawnAttemptsExhausted {
                attempts: 2,
                width: 10,
                height: 8
            }
        );
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let dims = MapDims::new(4, 4).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            sample_spawn_pair(dims, 0, &mut rng),
            Err(MapError::InvalidSpawnAttempts)
        );
    }

    #[test]
    fn test_single_cell_map_accepts_first_draw() {
        let dims = MapDims::new(1, 1).unwrap();
        assert_eq!(min_spawn_distance_sq(dims), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let pair = sample_spawn_pair(dims, 1, &mut rng).unwrap();
        assert_eq!(pair.p1, GridPos::new(0, 0));
        assert_eq!(pair.p2, GridPos::new(0, 0));
    }

    #[test]
    fn test_random_pairs_are_fair() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for &(w, h) in &[(2, 1), (3, 3), (10, 8), (100, 80), (5, 40), (64, 2)] {
            let dims = MapDims::new(w, h).unwrap();
            for _ in 0..50 {
                let pair = sample_spawn_pair(dims, 10_000, &mut rng).unwrap();
                assert!(pair.is_fair(dims), "unfair pair {pair:?} on {w}x{h}");
            }
        }
    }
}
