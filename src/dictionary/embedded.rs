//! Embedded noun list
//!
//! Compiled into the binary at build time from `data/nouns.txt`.

include!(concat!(env!("OUT_DIR"), "/nouns.rs"));
