mod common;
mod one_to_one;
