mod championship;
mod common;
pub(crate) mod lenient;
mod race;
mod registration;
mod season;

pub use championship::*;
pub use common::*;
pub use race::*;
pub use registration::*;
pub use season::*;

pub(crate) use championship::format_number;
