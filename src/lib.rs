//! Converts Gradle Groovy build scripts to idiomatic Gradle Kotlin DSL
//! scripts.
//!
//! The centerpiece is the rewrite of imperative task declarations:
//!
//! ```text
//! task compileTest(dependsOn: compile) { doLast { } }
//! ```
//!
//! becomes the declarative delegate-property form
//!
//! ```text
//! val compileTest by tasks.creating {
//!     dependsOn(compile)
//!     doLast {
//!     }
//! }
//! ```
//!
//! The Groovy front end stays outside this crate, behind
//! [`foreign::Frontend`]; everything downstream of it is here: the Kotlin
//! tree model ([`ast`]), the prism algebra ([`prism`]) the rules are built
//! from, the bottom-up rewrite engine ([`ast::rewrite`]), the task-idiom
//! rules ([`beautify`]), and the printer ([`printer`]).

pub use crate::errors::ConvertError;
pub use crate::pipeline::{gradle2kts, kotlin_source_for};

pub mod ast;
pub mod beautify;
pub mod convert;
pub mod errors;
pub mod foreign;
pub mod pipeline;
pub mod printer;
pub mod prism;
