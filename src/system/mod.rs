pub mod building;

pub use building::System;
