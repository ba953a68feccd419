use burn::backend::NdArray;

use textmodel::config::mlm::mlm_base_config;
use textmodel::util::sample_token_batch;

type B = NdArray;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let device = Default::default();

    let (text_config, latent_config) = mlm_base_config();
    text_config.validate()?;

    let vocab_size = text_config.vocab_size;
    let encoder = text_config.init::<B, ()>((), latent_config, &device);

    let batch = sample_token_batch::<B>(2, 10, 32, vocab_size);
    println!("padded input length: {}", batch.seq_len());

    let latents = encoder.forward(batch.tokens);
    println!("latents: {:?}", latents.dims());

    Ok(())
}
