use burn::config::Config;
use burn::module::Module;
use burn::prelude::{Backend, Int, Tensor};
use tracing::debug;

use crate::error::ConfigError;
use crate::model::adapter::{TextInputAdapter, TextInputAdapterConfig};
use crate::model::encoder::{LatentConfig, LatentEncoder, LatentEncoderConfig};

pub mod adapter;
pub mod encoder;

/// Options shared with the latent encoder, embedded by value rather than
/// inherited.
#[derive(Config)]
pub struct EncoderBaseConfig {
    #[config(default = 0.02)]
    pub init_scale: f64,
}

#[derive(Config)]
pub struct TextEncoderConfig {
    #[config(default = 10003)]
    pub vocab_size: usize,
    #[config(default = 256)]
    pub max_seq_len: usize,
    #[config(default = 64)]
    pub num_input_channels: usize,
    pub base: EncoderBaseConfig,
}

impl TextEncoderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vocab_size == 0 {
            return Err(ConfigError::ZeroVocabSize);
        }

        if self.max_seq_len == 0 {
            return Err(ConfigError::ZeroMaxSeqLen);
        }

        if self.num_input_channels == 0 {
            return Err(ConfigError::ZeroInputChannels);
        }

        Ok(())
    }

    pub fn init<B: Backend, EC: LatentEncoderConfig>(
        self,
        encoder_config: EC,
        latent_config: LatentConfig,
        device: &B::Device,
    ) -> TextEncoder<B, EC::Model<B>> {
        debug!(
            "building text encoder: vocab_size={} max_seq_len={} num_latents={}",
            self.vocab_size, self.max_seq_len, latent_config.num_latents
        );

        let input_adapter = TextInputAdapterConfig {
            vocab_size: self.vocab_size,
            max_seq_len: self.max_seq_len,
            num_input_channels: self.num_input_channels,
            init_scale: self.base.init_scale,
        }
        .init(device);

        TextEncoder {
            input_adapter,
            encoder: <EC::Model<B> as LatentEncoder<B>>::new(
                encoder_config,
                self.num_input_channels,
                latent_config,
                device,
            ),
        }
    }
}

#[derive(Module, Debug)]
pub struct TextEncoder<B: Backend, E> {
    pub input_adapter: TextInputAdapter<B>,
    pub encoder: E,
}

impl<B: Backend, E: LatentEncoder<B>> TextEncoder<B, E> {
    pub fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        // tokens : B x L
        let embedded = self.input_adapter.forward(tokens);
        // embedded : B x L x C

        // latents : B x N x C_latent
        self.encoder.forward(embedded)
    }
}
