//! Property-based tests for path handling and macro extraction.
