pub mod info;
pub mod simplify;
