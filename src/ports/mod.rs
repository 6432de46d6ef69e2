//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StudentRepository` - Uniqueness lookups and subscription persistence
//! - `NoticeService` - Outbound notices (welcome message)

mod notice_service;
mod student_repository;

pub use notice_service::NoticeService;
pub use student_repository::StudentRepository;
