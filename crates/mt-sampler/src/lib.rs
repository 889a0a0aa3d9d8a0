//! `mt-sampler`: random shortest-path route sampling.
//!
//! Given a [`RoadNetwork`](mt_spatial::RoadNetwork), [`RouteSampler`] draws
//! random origin/destination pairs and keeps the minimum travel-time path
//! between them as a [`Route`]: the node coordinates along the path plus its
//! great-circle length.
//!
//! ```rust,ignore
//! let routes = RouteSampler::new()
//!     .seed(42)
//!     .max_attempts(10_000)
//!     .sample(&network, 500)?;
//! ```

pub mod error;
pub mod route;
pub mod sampler;


pub use error::{SamplerError, SamplerResult};
pub use route::Route;
pub use sampler::RouteSampler;
