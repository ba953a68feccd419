use crate::model::encoder::LatentConfig;
use crate::model::{EncoderBaseConfig, TextEncoderConfig};

pub fn mlm_base_config() -> (TextEncoderConfig, LatentConfig) {
    let text_config = TextEncoderConfig {
        vocab_size: 10003,
        max_seq_len: 256,
        num_input_channels: 64,
        base: EncoderBaseConfig { init_scale: 0.02 },
    };

    let latent_config = LatentConfig {
        num_latents: 256,
        num_latent_channels: 1280,
        activation_checkpointing: false,
        activation_offloading: false,
    };

    (text_config, latent_config)
}
