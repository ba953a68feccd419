use burn::config::Config;
use burn::module::Module;
use burn::prelude::{Backend, Tensor};

pub mod linear;

/// Latent bottleneck parameters forwarded to the encoder implementation. The
/// activation flags are opaque pass-throughs; whether and how an encoder
/// checkpoints or offloads is its own business.
#[derive(Config)]
pub struct LatentConfig {
    pub num_latents: usize,
    pub num_latent_channels: usize,
    #[config(default = false)]
    pub activation_checkpointing: bool,
    #[config(default = false)]
    pub activation_offloading: bool,
}

pub trait LatentEncoderConfig {
    type Model<B>: LatentEncoder<B, Config = Self> where B: Backend;
}

/// An encoder that attends a batch of per-token vectors into a fixed number
/// of latents, decoupling output size from input length.
pub trait LatentEncoder<B: Backend>: Module<B> {
    type Config: LatentEncoderConfig;

    fn new(
        config: Self::Config,
        num_input_channels: usize,
        latent_config: LatentConfig,
        device: &B::Device,
    ) -> Self;

    /// inputs : B x L x C_in, output : B x N x C_latent
    fn forward(&self, inputs: Tensor<B, 3>) -> Tensor<B, 3>;
}
