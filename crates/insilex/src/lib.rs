//! The insilex crate.
//!
//! Consumers of the SELEX engine output:
//!  - JSON reports of the final library and round history
//!  - SVG progress plots
//!  - Run settings from JSON files and command line overrides
//!
//! The `selex` and `aptagen` binaries are built on top of these.
//!

mod report;
mod plot;
mod settings;

pub use report::*;
pub use plot::*;
pub use settings::*;

