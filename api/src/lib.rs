// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: Postgres adapters
// - presentation: HTTP handlers, routing and the response envelope
// - application: repository ports and use cases
// - domain: core models and field constraints

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;
