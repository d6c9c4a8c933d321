mod mat;
mod module;
mod montgomery;
mod msm;
mod ntt;
mod vec;

pub use mat::*;
pub use module::*;
pub use montgomery::*;
pub use msm::*;
pub use ntt::*;
pub use vec::*;
