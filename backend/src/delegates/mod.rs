mod mat;
mod module;
mod montgomery;
mod msm;
mod ntt;
mod vec;
