//! Built-in suite descriptors
//!
//! Every bundled tester is driven through its own Makefile; see [`MakeSuite`].

pub mod make;

pub use make::MakeSuite;

use crate::suite::{Suite, SuiteArgs, SuiteDescriptor, SuiteTier};

pub const FSOARES: &str = "fsoares";
pub const TRIPOUILLE: &str = "tripouille";
pub const ALELIEVR: &str = "alelievr";
pub const WAR_MACHINE: &str = "war-machine";

fn fsoares(args: SuiteArgs) -> Box<dyn Suite> {
    Box::new(MakeSuite::new(FSOARES, "fsoares", args))
}

fn tripouille(args: SuiteArgs) -> Box<dyn Suite> {
    Box::new(MakeSuite::new(TRIPOUILLE, "Tripouille", args))
}

fn alelievr(args: SuiteArgs) -> Box<dyn Suite> {
    Box::new(MakeSuite::new(ALELIEVR, "alelievr", args))
}

fn war_machine(args: SuiteArgs) -> Box<dyn Suite> {
    Box::new(MakeSuite::new(WAR_MACHINE, "war-machine", args))
}

pub(crate) fn builtin_descriptors() -> Vec<SuiteDescriptor> {
    vec![
        SuiteDescriptor::new(FSOARES, "fsoares", SuiteTier::Baseline, fsoares),
        SuiteDescriptor::new(TRIPOUILLE, "Tripouille", SuiteTier::Compat, tripouille),
        SuiteDescriptor::new(ALELIEVR, "alelievr", SuiteTier::Compat, alelievr),
        SuiteDescriptor::new(WAR_MACHINE, "war-machine", SuiteTier::Compat, war_machine),
    ]
}
