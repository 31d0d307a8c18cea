#[macro_use]
extern crate serde_derive;

mod entry;
pub mod arena;
pub mod splay_tree;
