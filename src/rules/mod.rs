//! Game rules for freestyle Gomoku
//!
//! Five or more stones in an unbroken line wins, for either side.
//! There are no captures and no forbidden moves; obstacle cells simply
//! break any line that runs through them.

pub mod win;

// Re-exports for convenient access
pub use win::{check_draw, check_win, has_five, is_legal, run_length, winning_line, DIRECTIONS};
