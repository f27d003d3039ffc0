pub mod capabilities;
pub mod ext;
pub mod traits;

pub use capabilities::CapabilitiesBuilder;
pub use ext::RouterExt;
pub use traits::Router;
