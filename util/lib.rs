/*!
This crate contains small utilities shared by the other wordbag crates.
*/

#![allow(clippy::tabs_in_doc_comments)]

pub mod table;
pub mod tokenizer;
