//! Test utilities for series builder testing
