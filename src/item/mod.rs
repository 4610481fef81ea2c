/// This module provides a CSV item writer implementation.
pub mod csv;

/// This module provides the fake contact reader implementation.
pub mod fake;

/// This module provides a coverage-tallying item writer, useful for
/// reporting on generated datasets.
pub mod coverage;
