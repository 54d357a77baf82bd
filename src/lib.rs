pub mod config;
pub mod http;
pub mod meeting;
pub mod scheduler;
pub mod zoom;

pub use config::{Config, ZoomConfig};
pub use http::{create_router, AppState};
pub use meeting::{MeetingConfig, MeetingDuration, MeetingId, MeetingResult, ValidationError};
pub use scheduler::{MeetingScheduler, ScheduleError};
pub use zoom::{
    AccessToken, AuthError, MeetingCreationError, MeetingCreator, OAuthTokenProvider,
    TokenProvider, ZoomMeetingCreator,
};
