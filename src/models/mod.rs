pub mod script;
pub mod turtle_state;
pub mod vector;

pub use script::{ScriptLibrary, TurtleScript};
pub use turtle_state::TurtleState;
pub use vector::Vec2D;
