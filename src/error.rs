use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("vocab_size must be at least 1")]
    ZeroVocabSize,
    #[error("max_seq_len must be at least 1")]
    ZeroMaxSeqLen,
    #[error("num_input_channels must be at least 1")]
    ZeroInputChannels,
}
