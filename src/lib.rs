//! Multi-elevator dispatch simulator.
//!
//! A building of identical elevators answers one floor call at a time: the
//! nearest elevator that has room and is idle or already heading toward the
//! caller is reserved, travels to the caller (pickup leg) and then carries the
//! passengers to their floor (drop-off leg), one floor per step.

/* Modules */
pub mod config;
pub mod dispatch;
pub mod elevator;
pub mod session;
pub mod shared;
pub mod system;

pub use config::{load_config, Config};
pub use elevator::{Elevator, Movement};
pub use shared::{Behaviour, Direction, ElevatorId, ElevatorStatus, Leg, SystemError, SystemSnapshot};
pub use system::System;
