//! Map generation: mirrored hill field plus a fair pair of spawn points
//!
//! Every hill is placed together with a twin reflected through the map center
//! (same spreads, rotation plus π). Pairs are drawn independently and summed
//! as is; no symmetrisation pass runs over the finished grid. Since a twin
//! evaluates to its hill at the mirrored cell, `payout(p)` and
//! `payout(mirror(p))` agree up to float rounding.

mod spawn;

use std::f64::consts::PI;

use log::{debug, info};
use rand::Rng;

use crate::{
    config::MapConfig,
    error::MapError,
    field::OrientedGaussianField,
    grid::{GridPos, MapDims, PayoutGrid},
    rng::{RngManager, HILLS_STREAM, SPAWNS_STREAM},
};

pub use spawn::{min_spawn_distance_sq, sample_spawn_pair, SpawnPair};

pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT: u32 = 80;
pub const DEFAULT_NUM_HILLS: u32 = 4;
pub const DEFAULT_HILL_SIZE: f64 = 30.0;
pub const DEFAULT_MAX_SPAWN_ATTEMPTS: u32 = 10_000;

pub struct MapGeneratorBuilder {
    width: u32,
    height: u32,
    num_hills: u32,
    hill_size: f64,
    max_spawn_attempts: u32,
}

impl MapGeneratorBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            num_hills: DEFAULT_NUM_HILLS,
            hill_size: DEFAULT_HILL_SIZE,
            max_spawn_attempts: DEFAULT_MAX_SPAWN_ATTEMPTS,
        }
    }

    pub fn num_hills(mut self, num_hills: u32) -> Self {
        self.num_hills = num_hills;
        self
    }

    /// Upper bound scale for hill spread; sigmas are drawn from `(1, hill_size + 1)`.
    pub fn hill_size(mut self, hill_size: f64) -> Self {
        self.hill_size = hill_size;
        self
    }

    pub fn max_spawn_attempts(mut self, max_spawn_attempts: u32) -> Self {
        self.max_spawn_attempts = max_spawn_attempts;
        self
    }

    pub fn build(self) -> Result<MapGenerator, MapError> {
        let dims = MapDims::new(self.width, self.height)?;
        if !self.hill_size.is_finite() || self.hill_size <= 0.0 {
            return Err(MapError::InvalidHillSize(self.hill_size));
        }
        if self.max_spawn_attempts == 0 {
            return Err(MapError::InvalidSpawnAttempts);
        }
        Ok(MapGenerator {
            dims,
            num_hills: self.num_hills,
            hill_size: self.hill_size,
            max_spawn_attempts: self.max_spawn_attempts,
        })
    }
}

impl Default for MapGeneratorBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[derive(Debug, Clone)]
pub struct MapGenerator {
    dims: MapDims,
    num_hills: u32,
    hill_size: f64,
    max_spawn_attempts: u32,
}

impl MapGenerator {
    pub fn builder(width: u32, height: u32) -> MapGeneratorBuilder {
        MapGeneratorBuilder::new(width, height)
    }

    pub fn from_config(config: &MapConfig) -> Result<Self, MapError> {
        Self::builder(config.width, config.height)
            .num_hills(config.num_hills)
            .hill_size(config.hill_size)
            .max_spawn_attempts(config.max_spawn_attempts)
            .build()
    }

    pub fn dims(&self) -> MapDims {
        self.dims
    }

    pub fn num_hills(&self) -> u32 {
        self.num_hills
    }

    pub fn hill_size(&self) -> f64 {
        self.hill_size
    }

    /// Draws `num_hills` hills, each followed by its mirrored twin.
    pub fn generate_hills<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<OrientedGaussianField> {
        let mut hills = Vec::with_capacity(self.num_hills as usize * 2);
        for _ in 0..self.num_hills {
            let cx = f64::from(rng.gen_range(0..self.dims.width()));
            let cy = f64::from(rng.gen_range(0..self.dims.height()));
            let sx = rng.gen::<f64>() * self.hill_size + 1.0;
            let sy = rng.gen::<f64>() * self.hill_size + 1.0;
            let theta = rng.gen::<f64>() * PI;
            debug!("hill at ({cx}, {cy}) sigma ({sx:.3}, {sy:.3}) theta {theta:.3}");

            hills.push(OrientedGaussianField::new((cx, cy), (sx, sy), theta));
            hills.push(OrientedGaussianField::new(
                self.dims.mirror_point(cx, cy),
                (sx, sy),
                theta + PI,
            ));
        }
        hills
    }

    /// Sums every hill at every integer cell.
    pub fn evaluate(&self, hills: &[OrientedGaussianField]) -> PayoutGrid {
        evaluate_hills(self.dims, hills)
    }

    pub fn generate_payouts<R: Rng + ?Sized>(&self, rng: &mut R) -> PayoutGrid {
        let hills = self.generate_hills(rng);
        self.evaluate(&hills)
    }

    pub fn generate_spawn_points<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<SpawnPair, MapError> {
        sample_spawn_pair(self.dims, self.max_spawn_attempts, rng)
    }

    /// Payouts then spawns, both drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MapDescriptor, MapError> {
        let payout_rates = self.generate_payouts(rng);
        let spawns = self.generate_spawn_points(rng)?;
        Ok(self.finish(payout_rates, spawns))
    }

    /// Uses separate derived streams for the hill field and the spawn pair.
    pub fn generate_seeded(&self, seed: u64) -> Result<MapDescriptor, MapError> {
        let rngs = RngManager::new(seed);
        let payout_rates = self.generate_payouts(&mut rngs.stream(HILLS_STREAM));
        let spawns = self.generate_spawn_points(&mut rngs.stream(SPAWNS_STREAM))?;
        Ok(self.finish(payout_rates, spawns))
    }

    fn finish(&self, payout_rates: PayoutGrid, spawns: SpawnPair) -> MapDescriptor {
        info!(
            "generated {}x{} map with {} hill pair(s), max payout {:.4}, spawns {:?} / {:?}",
            self.dims.width(),
            self.dims.height(),
            self.num_hills,
            payout_rates.max_value(),
            spawns.p1,
            spawns.p2
        );
        MapDescriptor {
            payout_rates,
            spawns,
        }
    }
}

/// Sums all hills at each cell. Cells far from every hill can come out as
/// exactly 0.0 through `exp` underflow, so values are non-negative rather than
/// strictly positive.
pub fn evaluate_hills(dims: MapDims, hills: &[OrientedGaussianField]) -> PayoutGrid {
    PayoutGrid::from_fn(dims, |pos| {
        let (x, y) = (f64::from(pos.x), f64::from(pos.y));
        hills.iter().map(|hill| hill.value(x, y)).sum()
    })
}

/// A finished map: the payout field and the two spawn cells.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDescriptor {
    payout_rates: PayoutGrid,
    spawns: SpawnPair,
}

impl MapDescriptor {
    pub fn dims(&self) -> MapDims {
        self.payout_rates.dims()
    }

    pub fn width(&self) -> u32 {
        self.payout_rates.width()
    }

    pub fn height(&self) -> u32 {
        self.payout_rates.height()
    }

    pub fn payout(&self, x: u32, y: u32) -> f64 {
        self.payout_rates.payout(x, y)
    }

    pub fn payout_rates(&self) -> &PayoutGrid {
        &self.payout_rates
    }

    pub fn spawns(&self) -> SpawnPair {
        self.spawns
    }

    pub fn p1_spawn(&self) -> GridPos {
        self.spawns.p1
    }

    pub fn p2_spawn(&self) -> GridPos {
        self.spawns.p2
    }
}
