mod cn001_test;
mod normalize_proptest;
