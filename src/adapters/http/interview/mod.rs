//! HTTP adapter for interview endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateInterviewRequest, ErrorResponse, InterviewResponse, SendMessageRequest, TurnResponse,
    TurnView,
};
pub use handlers::InterviewAppState;
pub use routes::interview_router;
