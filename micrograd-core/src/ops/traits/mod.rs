pub mod numeric;

pub use numeric::Scalar;
