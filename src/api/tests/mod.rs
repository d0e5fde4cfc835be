//! Unit tests for the request/response boundary.

mod response_tests;
