//! GraphQL client driven by gqlshape shapes.
//!
//! The client derives an operation from the shape, sends it through a
//! [`Transport`], decodes `data` back into the same shape and reports the
//! server's `errors` array.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate gqlshape_core as gqlshape;

mod client;
mod error;
#[cfg(feature = "http")]
mod http;
mod populate;
mod transport;

#[cfg(test)]
mod populate_tests;

pub use client::{Client, Outcome};
pub use error::{Error, Location, Result, ServerError, ServerErrors, TransportError};
#[cfg(feature = "http")]
pub use http::{HttpTransport, HttpTransportBuilder};
pub use populate::populate;
pub use transport::{Request, Response, Transport};
