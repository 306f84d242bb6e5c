use crate::context::Context;
use crate::error::MicrogradError;
use crate::node::Node;
use crate::ops::traits::Scalar;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// Identity: the weighted sum is the output.
    Linear,
    #[default]
    Tanh,
    Relu,
}

impl Activation {
    /// Records the activation of `x`. `Linear` records nothing and hands back
    /// `x` itself.
    pub fn apply<T: Scalar>(self, ctx: &Context<T>, x: &Node<T>) -> Node<T> {
        match self {
            Activation::Linear => x.clone(),
            Activation::Tanh => ctx.tanh(x),
            Activation::Relu => ctx.relu(x),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Linear => "linear",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
        };
        f.write_str(name)
    }
}

impl FromStr for Activation {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Activation::Linear),
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
