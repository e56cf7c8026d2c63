pub mod board_state;
pub mod drag;

pub use board_state::BoardState;
pub use drag::DragState;
