use burn::prelude::Backend;
use burn::tensor::{Int, Tensor};
use unzip3::Unzip3;

use crate::data::TextBatch;

pub enum PaddingType {
    LongestSequence,
    Explicit(usize),
}

pub fn trim_sequence(mut tokens: Vec<i32>, len: usize) -> (Vec<i32>, usize) {
    assert!(len < tokens.len());

    tokens.truncate(len);

    (tokens, len)
}

pub fn pad_sequence(mut tokens: Vec<i32>, len: usize, pad_id: i32) -> (Vec<i32>, usize) {
    let original_len = tokens.len();

    assert!(len >= original_len);

    tokens.extend(vec![pad_id; len - original_len]);

    (tokens, original_len)
}

fn pad_or_trim(sequences: Vec<Vec<i32>>, len: usize, pad_id: i32) -> Vec<(Vec<i32>, usize)> {
    sequences
        .into_iter()
        .map(|tokens| match tokens.len() {
            original_len if len < original_len => trim_sequence(tokens, len),
            _ => pad_sequence(tokens, len, pad_id),
        })
        .collect::<Vec<_>>()
}

pub fn pad_sequences<B: Backend>(
    sequences: Vec<Vec<i32>>,
    padding: PaddingType,
    pad_id: i32,
) -> TextBatch<B> {
    let sequences_and_lens = match padding {
        PaddingType::Explicit(length) => pad_or_trim(sequences, length, pad_id),
        PaddingType::LongestSequence => {
            let max_len = sequences.iter().map(Vec::len).max().unwrap();
            pad_or_trim(sequences, max_len, pad_id)
        }
    };

    let (tokens, masks, lens) = sequences_and_lens
        .into_iter()
        .map(|(tokens, len)| {
            let mut mask = vec![1; len];
            mask.extend(vec![0; tokens.len() - len]);

            let tokens = Tensor::<B, 1, Int>::from_ints(&*tokens, &B::Device::default());
            let mask = Tensor::<B, 1, Int>::from_ints(&*mask, &B::Device::default());

            (tokens, mask, len)
        })
        .unzip3();

    TextBatch {
        tokens: Tensor::stack(tokens, 0),
        attention_mask: Tensor::stack(masks, 0),
        sequence_lens: lens,
    }
}
