pub mod relu;
pub mod tanh;

pub(crate) use relu::relu_backward;
pub(crate) use tanh::tanh_backward;
