//! Note: This server is a reference runtime. It keeps the whole address space
//! in memory and has no transport, sessions or security; it exists so that
//! method bindings can be registered and invoked end to end. Anything that
//! implements [`AddressSpaceInterface`] can host bound methods.

pub mod constants;

mod config;
pub use config::*;

pub mod error;

mod node;
pub use node::*;

mod call;
pub use call::*;

mod address_space;
pub use address_space::*;

mod server;
pub use server::*;

pub use uabind_method::AddressSpaceInterface;
