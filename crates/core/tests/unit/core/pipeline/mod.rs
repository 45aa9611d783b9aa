//! Unit tests for the pipeline machinery.
