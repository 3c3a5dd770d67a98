//! Geometric billiard shot planning.
//!
//! Given a table, a cue ball, a target ball and obstructing balls, the
//! solver decides whether the target can be sunk directly or via a
//! single-rail bank shot, and produces the pocket, the ghost-ball aim
//! point and (for banks) the rail aim point. Ball detection input,
//! random layout generation and plan delivery over TCP are thin surfaces
//! around that core.

mod ball;
mod config;
mod detection;
mod geometry;
mod layout;
mod logging;
mod plan;
pub mod protocol;
mod solver;
mod table;
pub mod transport;

pub use ball::*;
pub use config::*;
pub use detection::*;
pub use geometry::*;
pub use layout::*;
pub use logging::init_logging;
pub use plan::*;
pub use protocol::*;
pub use solver::*;
pub use table::*;
pub use transport::tcp::TcpTransport;
