// src/ngram/generator/mod.rs

mod core;
mod rolling;

pub use self::core::NGramGenerator;
