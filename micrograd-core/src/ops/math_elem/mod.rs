pub mod exp;

pub(crate) use exp::exp_backward;
