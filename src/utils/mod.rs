//! Utility functions for identifier generation, URL checking, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`id_generator`] - Short identifier generation and shape checking
//! - [`url_validator`] - Target URL validation
//! - [`client_ip`] - Client identity extraction from HTTP headers

pub mod client_ip;
pub mod id_generator;
pub mod url_validator;
