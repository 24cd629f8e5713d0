mod adapter;
mod normalizer;
