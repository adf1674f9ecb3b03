/// Alias resolution layer.
pub mod errors;
pub mod resolver;
pub mod suggest;

pub use errors::ResolveError;
pub use resolver::{Resolution, Target, complete, resolve};
