//! Stateless formula functions, callable standalone or through a
//! distribution object.

pub mod poisson;
