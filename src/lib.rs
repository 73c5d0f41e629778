// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB and cache adapters
// - presentation: HTTP handlers and routing
// - application: use cases, access policy, repository ports
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
