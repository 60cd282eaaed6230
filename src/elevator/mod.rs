pub mod movement;
pub mod state;

pub use movement::Movement;
pub use state::Elevator;
