pub mod macros;
pub mod structs;

pub use structs::CarState;
pub use structs::DecisionPoint;
pub use structs::Direction;
pub use structs::DispatchResponse;
pub use structs::MotionPhase;
pub use structs::Snapshot;
