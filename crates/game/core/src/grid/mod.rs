//! Grid movement queries and the interaction categories they resolve to.
mod collision;
mod interaction;

pub use collision::{MoveProbe, try_move};
pub use interaction::Interaction;
