//! Pure rule checks over a board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, WinningLine, check_winner, detect_win};
