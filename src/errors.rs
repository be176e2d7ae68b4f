//! Conversion errors.
//!
//! Three kinds, per the pipeline contract: the front end could not parse
//! the Groovy source, the converter met a foreign construct it does not
//! model, or the printer met a node shape it does not render. A prism or
//! beautifier rule failing to match is not an error; that path is `None`
//! and leaves the subtree as it was.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    /// The Groovy front end could not produce a tree from the input text.
    /// Surfaced to the caller as-is.
    #[error("parse error: {message}")]
    #[diagnostic(code(gradle2kts::parse))]
    Parse { message: String },

    /// The converter met a foreign node kind with no Kotlin mapping.
    #[error("unsupported construct: {kind}")]
    #[diagnostic(
        code(gradle2kts::unsupported_construct),
        help("only the declarative build-script subset is modelled; rewrite this construct by hand")
    )]
    UnsupportedConstruct { kind: String },

    /// The printer met a node variant that never survives beautification.
    #[error("unsupported node: {kind}")]
    #[diagnostic(code(gradle2kts::unsupported_node))]
    UnsupportedNode { kind: String },
}

impl ConvertError {
    pub fn parse(message: impl Into<String>) -> Self {
        ConvertError::Parse { message: message.into() }
    }

    pub fn unsupported_construct(kind: impl Into<String>) -> Self {
        ConvertError::UnsupportedConstruct { kind: kind.into() }
    }

    pub fn unsupported_node(kind: impl Into<String>) -> Self {
        ConvertError::UnsupportedNode { kind: kind.into() }
    }
}

/// Prints a [`ConvertError`] with full miette diagnostics. For caller-side
/// reporting around the pipeline; the pipeline itself never prints.
pub fn report(error: ConvertError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
