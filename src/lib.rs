//! Client and standings presenter for the CC6 race results service.
//!
//! [`ResultsClient`] fetches seasons, race results, championships and
//! participant histories, and submits registrations. The [`standings`]
//! module turns a championship payload into a display table without any I/O.

mod api;
mod client;
pub mod config;
mod error;
pub mod model;
pub mod query;
pub mod results;
pub mod session;
pub mod standings;
pub mod theme;

pub use client::ResultsClient;
pub use config::ClientConfig;
pub use error::{Result, ResultsError};
pub use model::*;
pub use query::{ChampionshipQuery, RaceQuery};
pub use session::ChampionshipSession;
pub use standings::{generate_categories, render_standings, StandingsTable};
