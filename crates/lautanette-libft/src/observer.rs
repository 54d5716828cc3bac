//! Run observer - progress hooks for an orchestration run

use crate::result::SuiteResult;

/// Hooks called while suites run
///
/// Every method has a default, so implementors only override what they show.
pub trait RunObserver {
    fn suite_started(&mut self, _name: &str) {}

    fn suite_finished(&mut self, _result: &SuiteResult) {}

    fn suite_crashed(&mut self, _name: &str, _message: &str) {}

    /// Receives the final pass/fail banner
    fn run_finished(&mut self, banner: &str) {
        println!("{}", banner);
    }
}

/// Prints the banner and nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl RunObserver for ConsoleObserver {}

/// Swallows everything, including the banner
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {
    fn run_finished(&mut self, _banner: &str) {}
}
