//! `mf-network` — the synthetic zone network and path finding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `FlowNetwork` (CSR arena), `NodeKind`, `LinkKind`           |
//! | [`builder`] | `NetworkBuilder` (zone set → network via mesh adjacency)    |
//! | [`router`]  | `PathFinder` trait, `Route`, `DijkstraPathFinder`, `YenPathFinder` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Topology
//!
//! Every zone contributes five nodes: a centroid and one boundary node per
//! side.  Links come in three kinds:
//!
//! ```text
//!             N                   Internal   C ↔ N/S/E/W
//!          ┌──●──┐                Passing    every ordered boundary pair
//!        W ●  C  ● E              Connector  N ↔ neighbor's S,
//!          └──●──┘                           E ↔ neighbor's W
//!             S
//! ```

pub mod builder;
pub mod error;
pub mod network;
pub mod router;


pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use network::{FlowNetwork, LinkKind, NODES_PER_ZONE, NodeKind};
pub use router::{DijkstraPathFinder, PathFinder, Route, YenPathFinder};
