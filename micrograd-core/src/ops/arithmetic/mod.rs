// Binary arithmetic. Divide, subtract and negate are compositions of the
// primitive add/mul/pow nodes and have no backward rule of their own.
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub(crate) use add::add_backward;
pub(crate) use mul::mul_backward;
pub(crate) use pow::pow_backward;
