// citerank: rank the works citing a paper by abstract similarity
//
// This is the library root. The ranking core (corpus building, TF-IDF,
// cosine ranking) lives in `ranking`; everything else is retrieval,
// persistence and presentation around it.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod scholar;
pub mod snapshot;
