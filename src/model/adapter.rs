use burn::config::Config;
use burn::module::{Module, Param};
use burn::nn::{Embedding, EmbeddingConfig, Initializer};
use burn::prelude::{Backend, Int, Tensor};
use burn::tensor::Distribution;

#[derive(Config)]
pub struct TextInputAdapterConfig {
    pub vocab_size: usize,
    pub max_seq_len: usize,
    pub num_input_channels: usize,
    #[config(default = 0.02)]
    pub init_scale: f64,
}

impl TextInputAdapterConfig {
    pub fn init<B: Backend>(self, device: &B::Device) -> TextInputAdapter<B> {
        TextInputAdapter {
            embedding: EmbeddingConfig::new(self.vocab_size, self.num_input_channels)
                .with_initializer(Initializer::Normal {
                    mean: 0.0,
                    std: self.init_scale,
                })
                .init(device),
            pos_encoding: Param::from_tensor(Tensor::random(
                [self.max_seq_len, self.num_input_channels],
                Distribution::Normal(0.0, self.init_scale),
                device,
            )),
        }
    }
}

/// Turns batches of token ids into per-token vectors: a learned embedding
/// lookup plus a learned per-position encoding.
#[derive(Module, Debug)]
pub struct TextInputAdapter<B: Backend> {
    embedding: Embedding<B>,
    pos_encoding: Param<Tensor<B, 2>>,
}

impl<B: Backend> TextInputAdapter<B> {
    pub fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        let [_, seq_len] = tokens.dims();

        // tokens : B x L
        let embedded = self.embedding.forward(tokens);
        // embedded : B x L x C

        // TODO: prefix slicing assumes left-aligned sequences; left-truncated
        // inputs would get misaligned positions
        let pos = self.pos_encoding.val().slice([0..seq_len]);
        let pos = pos.unsqueeze_dim::<3>(0);

        embedded + pos
    }

    pub fn num_input_channels(&self) -> usize {
        self.pos_encoding.val().dims()[1]
    }
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use burn::prelude::{Int, Tensor};

    use super::*;

    type B = NdArray;

    fn adapter(vocab_size: usize, max_seq_len: usize, channels: usize) -> TextInputAdapter<B> {
        TextInputAdapterConfig::new(vocab_size, max_seq_len, channels).init(&Default::default())
    }

    #[test]
    fn output_shape_matches_input() {
        let adapter = adapter(10003, 256, 64);

        let tokens = Tensor::<B, 2, Int>::from_ints(
            [
                [0, 1, 2, 3, 4, 5, 6, 7, 8, 10002],
                [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            ],
            &Default::default(),
        );

        let embedded = adapter.forward(tokens);

        assert_eq!(embedded.dims(), [2, 10, 64]);
        assert_eq!(adapter.num_input_channels(), 64);
    }

    #[test]
    fn output_is_embedding_plus_position_prefix() {
        let device = Default::default();
        let adapter = adapter(16, 8, 4);

        let tokens = Tensor::<B, 2, Int>::from_ints([[3, 1, 4], [1, 5, 9]], &device);

        let embedded = adapter.forward(tokens.clone());

        let expected = adapter.embedding.forward(tokens)
            + adapter.pos_encoding.val().slice([0..3]).unsqueeze_dim::<3>(0);

        embedded.into_data().assert_approx_eq(&expected.into_data(), 5);
    }

    #[test]
    fn position_term_is_identical_across_batch() {
        let device = Default::default();
        let adapter = adapter(16, 8, 4);

        let tokens = Tensor::<B, 2, Int>::from_ints([[3, 1, 4], [7, 0, 12]], &device);

        let residual = adapter.forward(tokens.clone()) - adapter.embedding.forward(tokens);

        let first = residual.clone().slice([0..1]);
        let second = residual.slice([1..2]);

        first.into_data().assert_approx_eq(&second.into_data(), 5);
    }

    #[test]
    fn position_slice_is_prefix_stable() {
        let device = Default::default();
        let adapter = adapter(16, 8, 4);

        let long = Tensor::<B, 2, Int>::from_ints([[2, 4, 6, 8, 10, 12]], &device);
        let short = Tensor::<B, 2, Int>::from_ints([[2, 4, 6, 8]], &device);

        let long_prefix = adapter.forward(long).slice([0..1, 0..4]);
        let short_out = adapter.forward(short);

        long_prefix
            .into_data()
            .assert_approx_eq(&short_out.into_data(), 5);
    }

    #[test]
    #[should_panic]
    fn out_of_vocab_token_panics() {
        let adapter = adapter(16, 8, 4);

        let tokens = Tensor::<B, 2, Int>::from_ints([[16]], &Default::default());

        let _ = adapter.forward(tokens);
    }

    #[test]
    #[should_panic]
    fn oversized_sequence_panics() {
        let adapter = adapter(16, 4, 4);

        let tokens = Tensor::<B, 2, Int>::from_ints([[1, 2, 3, 4, 5, 6]], &Default::default());

        let _ = adapter.forward(tokens);
    }
}
