mod traits;

pub use traits::EmbeddedContext;
