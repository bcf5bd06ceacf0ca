pub mod dispatch;
pub mod fsm;
pub mod requests;

pub mod requests_tests;

pub use fsm::ElevatorFSM;
pub use requests::RequestTracker;
