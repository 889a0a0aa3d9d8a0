//! Random origin/destination sampling with shortest-path routes.
//!
//! # Algorithm
//!
//! ```text
//! while accepted < sample_size:
//!   ① origin      ← uniform over all nodes
//!   ② reachable   ← forward reachable set of origin (origin excluded)
//!                   empty → discard attempt
//!   ③ destination ← uniform over reachable
//!   ④ path        ← minimum travel-time path; NoRoute → discard attempt
//!   ⑤ accept path as a Route
//! ```
//!
//! Discarded attempts do not count toward `sample_size`, so every attempt is
//! counted against a cap.  On a graph where most nodes are dead ends the cap
//! turns an endless loop into [`SamplerError::GraphTooSparse`].

use mt_core::{NodeId, SampleRng};
use mt_spatial::{reachable_from, DijkstraRouter, RoadNetwork, Router, SpatialError};

use crate::{Route, SamplerError, SamplerResult};

/// Attempts allowed per requested route when no explicit cap is set.
const DEFAULT_ATTEMPTS_PER_ROUTE: usize = 100;

/// Floor for the default cap so tiny samples still get a fair number of draws.
const MIN_DEFAULT_ATTEMPTS: usize = 1_000;

/// Samples shortest-path routes from a road network.
///
/// | Method              | Default                                    |
/// |---------------------|--------------------------------------------|
/// | `.seed(s)`          | entropy-seeded (non-reproducible)          |
/// | `.max_attempts(n)`  | `max(sample_size * 100, 1000)`             |
#[derive(Debug, Clone)]
pub struct RouteSampler<R: Router = DijkstraRouter> {
    router:       R,
    seed:         Option<u64>,
    max_attempts: Option<usize>,
}

impl RouteSampler<DijkstraRouter> {
    pub fn new() -> Self {
        Self::with_router(DijkstraRouter)
    }
}

impl Default for RouteSampler<DijkstraRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> RouteSampler<R> {
    /// Sampler that routes with a custom [`Router`].
    pub fn with_router(router: R) -> Self {
        Self { router, seed: None, max_attempts: None }
    }

    /// Fix the RNG seed for reproducible samples.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Like [`seed`](Self::seed) but accepts an optional value.
    pub fn seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the total number of attempts (accepted + discarded).
    pub fn max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = Some(n);
        self
    }

    /// The effective attempt cap for a request of `sample_size` routes.
    pub fn attempt_cap(&self, sample_size: usize) -> usize {
        self.max_attempts.unwrap_or_else(|| {
            sample_size
                .saturating_mul(DEFAULT_ATTEMPTS_PER_ROUTE)
                .max(MIN_DEFAULT_ATTEMPTS)
        })
    }

    /// Sample `sample_size` routes using a fresh RNG built from the
    /// configured seed.
    pub fn sample(&self, network: &RoadNetwork, sample_size: usize) -> SamplerResult<Vec<Route>> {
        let mut rng = SampleRng::from_seed(self.seed);
        self.sample_with(network, sample_size, &mut rng)
    }

    /// Sample with a caller-owned RNG (the configured seed is ignored).
    pub fn sample_with(
        &self,
        network:     &RoadNetwork,
        sample_size: usize,
        rng:         &mut SampleRng,
    ) -> SamplerResult<Vec<Route>> {
        if sample_size == 0 {
            return Ok(Vec::new());
        }
        if network.is_empty() {
            return Err(SamplerError::EmptyNetwork);
        }

        let cap = self.attempt_cap(sample_size);
        let node_count = network.node_count() as u32;
        let mut routes = Vec::with_capacity(sample_size);
        let mut attempts = 0usize;

        while routes.len() < sample_size {
            if attempts >= cap {
                return Err(SamplerError::GraphTooSparse {
                    accepted:  routes.len(),
                    requested: sample_size,
                    attempts,
                });
            }
            attempts += 1;

            let origin = NodeId(rng.gen_range(0..node_count));
            let reachable = reachable_from(network, origin)?;
            let Some(&destination) = rng.choose(&reachable) else {
                log::debug!("attempt {attempts}: {origin} reaches no other node");
                continue;
            };

            let path = match self.router.shortest_path(network, origin, destination) {
                Ok(p) => p,
                Err(SpatialError::NoRoute { from, to }) => {
                    log::debug!("attempt {attempts}: no route {from} -> {to}");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if path.nodes.len() < 2 {
                continue;
            }

            let route = Route::from_path(network, &path)?;
            log::debug!(
                "route {}: {origin} -> {destination}, {} nodes, {:.3} km",
                routes.len(),
                route.len(),
                route.length_km()
            );
            routes.push(route);
        }

        log::info!(
            "sampled {} routes in {} attempts ({} discarded)",
            routes.len(),
            attempts,
            attempts - routes.len()
        );
        Ok(routes)
    }
}
