mod submission_request;
mod submission_state;
mod theme;

pub use submission_request::*;
pub use submission_state::SubmissionState;
pub use theme::*;
