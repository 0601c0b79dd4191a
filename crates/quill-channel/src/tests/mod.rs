//! Crate-level behaviour tests for the transport.

mod support;
