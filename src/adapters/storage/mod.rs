//! Storage Adapters
//!
//! In-memory implementations of the WizardRepository and ReportReader ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryWizardRepository** - Wizard sessions keyed by ID
//! - **InMemoryReportStore** - Submitted reports, optionally seeded with samples
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryReportStore, InMemoryWizardRepository};
//!
//! let wizards = InMemoryWizardRepository::new();
//! let reports = InMemoryReportStore::with_sample_reports(&Timestamp::now());
//! ```

mod in_memory_report_store;
mod in_memory_wizard_repository;

pub use in_memory_report_store::InMemoryReportStore;
pub use in_memory_wizard_repository::InMemoryWizardRepository;
