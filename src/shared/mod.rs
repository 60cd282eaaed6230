pub mod error;
pub mod macros;
pub mod structs;

pub use error::SystemError;
pub use structs::Behaviour;
pub use structs::Direction;
pub use structs::ElevatorId;
pub use structs::ElevatorStatus;
pub use structs::Leg;
pub use structs::SystemSnapshot;
