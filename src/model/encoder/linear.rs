use burn::module::{Module, Param};
use burn::nn::{Linear, LinearConfig};
use burn::prelude::{Backend, Tensor};
use burn::tensor::Distribution;

use crate::model::encoder::{LatentConfig, LatentEncoder, LatentEncoderConfig};

/// Attention-free stand-in for a full latent encoder: a learned latent array
/// plus a linear readout of the mean-pooled inputs.
#[derive(Module, Debug)]
pub struct LinearLatentEncoder<B: Backend> {
    latents: Param<Tensor<B, 2>>,
    input_proj: Linear<B>,
}

impl LatentEncoderConfig for () {
    type Model<B> = LinearLatentEncoder<B> where B: Backend;
}

impl<B: Backend> LatentEncoder<B> for LinearLatentEncoder<B> {
    type Config = ();

    fn new(
        _config: Self::Config,
        num_input_channels: usize,
        latent_config: LatentConfig,
        device: &B::Device,
    ) -> Self {
        LinearLatentEncoder {
            latents: Param::from_tensor(Tensor::random(
                [latent_config.num_latents, latent_config.num_latent_channels],
                Distribution::Normal(0.0, 0.02),
                device,
            )),
            input_proj: LinearConfig::new(num_input_channels, latent_config.num_latent_channels)
                .init(device),
        }
    }

    fn forward(&self, inputs: Tensor<B, 3>) -> Tensor<B, 3> {
        // inputs : B x L x C_in
        let pooled = self.input_proj.forward(inputs).mean_dim(1);
        // pooled : B x 1 x C_latent

        let latents = self.latents.val().unsqueeze_dim::<3>(0);

        latents + pooled
    }
}
