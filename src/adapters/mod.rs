//! Adapters - Implementations of port interfaces.
//!
//! - `student` - In-memory student store
//! - `notice` - Notice delivery that writes to the tracing log

pub mod notice;
pub mod student;

pub use notice::{SentNotice, TracingNoticeService};
pub use student::InMemoryStudentRepository;
