pub mod arc_spec;
pub mod frame;
pub mod triple;

pub use arc_spec::ArcSpec;
pub use frame::WorldFrame;
pub use triple::{AngleTriple, Corner};
