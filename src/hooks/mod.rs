pub mod session_context;
pub mod use_analysis;
pub mod use_noise_feed;
pub mod use_session;

pub use session_context::{use_session_context, SessionProvider};
pub use use_analysis::{analyze_events, AnalysisReport};
pub use use_noise_feed::{use_noise_feed, Toast, UseNoiseFeedHandle, FETCH_LIMIT};
pub use use_session::{use_session, UseSessionHandle};
