//! Notice service adapters.

mod tracing_notice_service;

pub use tracing_notice_service::{SentNotice, TracingNoticeService};
