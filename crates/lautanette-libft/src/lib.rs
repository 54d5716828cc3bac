//! Lautanette libft suite orchestration
//!
//! Runs third-party libft test suites against a built `libft.a` and folds
//! their outcomes into one report:
//! - Suite selection (baseline, opt-in compatibility suites, strict mode)
//! - Staging of suite sources and shared library artifacts
//! - Crash isolation around every suite invocation
//! - JSON and plain-text unified reports
//!
//! # Example
//!
//! ```no_run
//! use lautanette_config::ExecutionContext;
//! use lautanette_libft::Unified;
//!
//! let mut unified = Unified::new(
//!     "testers/libft",
//!     "temp",
//!     ["ft_strlen", "ft_split"],
//!     Vec::<String>::new(),
//!     ExecutionContext::from_env(),
//! );
//! let summary = unified.execute().unwrap();
//! println!("{}", summary.has_failures());
//! ```

pub mod error;
pub mod observer;
pub mod registry;
pub mod report;
pub mod result;
pub mod staging;
pub mod suite;
pub mod suites;
pub mod unified;

pub use error::{SuiteError, SuiteRunResult, UnifiedError, UnifiedResult};
pub use observer::{ConsoleObserver, RunObserver, SilentObserver};
pub use registry::SuiteRegistry;
pub use report::{ReportWriter, JSON_REPORT, TEXT_REPORT};
pub use result::{SuiteResult, SuiteSummary};
pub use staging::{StagingArea, HEADER_FILE, LIBRARY_FILE};
pub use suite::{Suite, SuiteArgs, SuiteDescriptor, SuiteOutcome, SuiteTier};
pub use unified::{Unified, UNIFIED_NAME};
