//! `mt-spatial`: road network, reachability, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`, `crop`  |
//! | [`reach`]   | `reachable_from`: forward reachability from a node         |
//! | [`router`]  | `Router` trait, `Path`, `DijkstraRouter`                    |
//! | [`loader`]  | `load_network_csv`: node/edge tables → `RoadNetwork`       |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |

pub mod error;
pub mod loader;
pub mod network;
pub mod reach;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use loader::{load_network_csv, load_network_readers};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use reach::reachable_from;
pub use router::{DijkstraRouter, Path, Router};
