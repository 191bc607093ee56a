/*! Validates patterns for the Hyperscan regular expression engine.

Hyperscan supports a large subset of PCRE syntax, but rejects constructs
that can't be compiled into its automata (back-references, for example),
and patterns that would match an empty buffer unless explicitly allowed.
The only reliable way of knowing whether Hyperscan accepts a pattern is
asking the Hyperscan pattern compiler itself, which is what this crate
does.

[`validate`] compiles the given pattern with default flags for block mode,
the engine's simplest, non-streaming evaluation mode, discards the compiled
database, and reports the outcome. When the pattern is rejected, the
returned [`PatternError`] carries the diagnostic produced by the engine,
verbatim.

# Example

```rust
assert!(hscheck::validate("foo(bar)+").is_ok());

let err = hscheck::validate("foo(bar").unwrap_err();
println!("invalid pattern: {}", err);
```
*/

#![deny(missing_docs)]

use hyperscan::prelude::*;
use thiserror::Error;

/// Error returned by [`validate`] when the engine rejects a pattern.
///
/// The error message is the diagnostic produced by the Hyperscan pattern
/// compiler, without any additional context, wrapping or classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PatternError {
    message: String,
}

impl PatternError {
    /// The diagnostic message produced by the pattern compiler.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl From<hyperscan::Error> for PatternError {
    fn from(err: hyperscan::Error) -> Self {
        match err {
            hyperscan::Error::Hyperscan(hyperscan::HsError::CompileError(
                err,
            )) => Self { message: err.message().to_string() },
            err => Self { message: err.to_string() },
        }
    }
}

/// Validates that `pattern` is a valid Hyperscan pattern.
///
/// The pattern is compiled with default flags (no caseless, multiline or
/// any other modifier) for block mode, and with no target-platform
/// descriptor. Returns `Ok(())` if the engine accepts the pattern, or a
/// [`PatternError`] with the engine's own diagnostic if it doesn't.
///
/// Each call is independent; nothing is cached and nothing engine-owned
/// outlives the call.
pub fn validate(pattern: &str) -> Result<(), PatternError> {
    let pattern = Pattern::new(pattern)?;

    // The compiled database is of no use for validation, drop it right
    // away. Both the database and the engine's compile-error object free
    // the underlying engine resources when dropped.
    let db: BlockDatabase = pattern.build()?;
    drop(db);

    Ok(())
}
