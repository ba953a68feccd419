use burn::prelude::Backend;
use itertools::Itertools;
use rand::{thread_rng, Rng};

use crate::data::TextBatch;
use crate::pad::{pad_sequences, PaddingType};

pub fn sample_token_sequence(len: usize, vocab_size: usize) -> Vec<i32> {
    thread_rng()
        .sample_iter(rand::distributions::Uniform::new(0, vocab_size as i32))
        .take(len)
        .collect_vec()
}

/// Samples a batch of random valid token sequences with lengths drawn from
/// `min_len..max_len`. Requires `min_len < max_len`.
pub fn sample_token_batch<B: Backend>(
    batch_size: usize,
    min_len: usize,
    max_len: usize,
    vocab_size: usize,
) -> TextBatch<B> {
    assert!(min_len < max_len);

    let seqs = (0..batch_size)
        .map(|_| {
            let len = thread_rng().gen_range(min_len..max_len);
            sample_token_sequence(len, vocab_size)
        })
        .collect_vec();

    pad_sequences::<B>(seqs, PaddingType::LongestSequence, 0)
}
