//! Tests for lockout detection

#[cfg(test)]
mod detector_tests;
