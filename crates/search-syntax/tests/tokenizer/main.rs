//! Tokenizer tests that exercise the public API only.

mod properties;
