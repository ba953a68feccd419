pub mod mlm;
