mod limbs;
mod module;

pub use limbs::*;
pub use module::*;
