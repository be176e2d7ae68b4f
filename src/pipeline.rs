//! The conversion pipeline.
//!
//! text → foreign tree → Kotlin tree → beautified tree → Kotlin text. Every
//! stage is a pure function of its input; a failure at any stage propagates
//! to the caller. Per-file recovery (keeping the original text, annotating
//! the error) is caller policy around the whole pipeline, never inside it.

use crate::beautify::beautify;
use crate::convert::convert;
use crate::errors::ConvertError;
use crate::foreign::{Frontend, GroovyNode};
use crate::printer::pretty_print;

/// Converts Gradle Groovy script code to Gradle Kotlin script code.
pub fn gradle2kts(frontend: &impl Frontend, source: &str) -> Result<String, ConvertError> {
    let foreign = frontend.parse(source)?;
    kotlin_source_for(&foreign)
}

/// The pure tail of the pipeline, for callers already holding a tree.
pub fn kotlin_source_for(foreign: &GroovyNode) -> Result<String, ConvertError> {
    let kotlin = convert(foreign)?;
    pretty_print(&beautify(&kotlin))
}
