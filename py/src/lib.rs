/*! A Python extension module for validating Hyperscan patterns.

This crate implements the `hscheck` Python module. It exposes a single
function that reports whether the Hyperscan pattern compiler accepts a
pattern, forwarding the compiler's diagnostic when it doesn't.

# Usage

```python
import hscheck

assert hscheck.validate_pattern('foo(bar)+') == ''
print(hscheck.validate_pattern('foo(bar'))
```
 */

#![deny(missing_docs)]

use pyo3::prelude::*;

use ::hscheck as hsck;

/// Validates that `pattern` is a valid Hyperscan pattern.
///
/// The pattern is compiled for block mode with default flags. Returns an
/// empty string when the pattern compiler accepts the pattern, or the
/// compiler's diagnostic message, verbatim, when it doesn't.
#[pyfunction]
fn validate_pattern(pattern: &str) -> String {
    match hsck::validate(pattern) {
        Ok(()) => String::new(),
        Err(err) => err.message().to_owned(),
    }
}

/// Python module for validating Hyperscan patterns.
#[pymodule]
fn hscheck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate_pattern, m)?)?;
    m.gil_used(false)?;
    Ok(())
}
