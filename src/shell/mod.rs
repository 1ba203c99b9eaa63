// Composition root for the registry.
//
// - Read config from the environment.
// - Open the configured record store and load the registry from it.
// - Wire the registry into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
