//! Bracket arithmetic for single and double elimination.
//!
//! This module answers "how many participants go out in the opening round"
//! for a bracket of any size, including brackets that are padded with byes:
//! - First round sizing for power-of-two and irregular brackets
//! - Last-place tie counts per format
//! - Amateur bracket sizing from a losers' round cutoff
//!
//! ## Example
//!
//! ```
//! use bracket_seeds::bracket::{BracketFormat, first_round_size, num_placing_last};
//!
//! // 9 players: one opening match, everyone else gets a bye
//! assert_eq!(first_round_size(9).unwrap(), 2);
//! assert_eq!(num_placing_last(8, BracketFormat::Double).unwrap(), 2);
//! ```

pub mod elimination;
pub mod models;

pub use elimination::{amateur_count, first_round_size, num_placing_last, projected_amateurs};
pub use models::{BracketFormat, ParticipantCount};
