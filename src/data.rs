use burn::prelude::{Backend, Int, Tensor};

pub struct TextBatch<B: Backend> {
    pub tokens: Tensor<B, 2, Int>,
    pub sequence_lens: Vec<usize>,
    pub attention_mask: Tensor<B, 2, Int>,
}

impl<B: Backend> TextBatch<B> {
    pub fn seq_len(&self) -> usize {
        self.tokens.dims()[1]
    }
}
