//! Rules: what may be played, and who places where.
//!
//! - `check_play`: pure legality of a single play
//! - `Standings`: bench, eliminations and the final ranking

pub mod legality;
pub mod standings;

pub use legality::{check_play, Legality, PlayContext};
pub use standings::Standings;
