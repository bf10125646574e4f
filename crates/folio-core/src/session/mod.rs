mod controller;

pub use controller::{
    PendingTurn, RejectReason, SessionController, SessionEvent, SessionState, Submission,
};
