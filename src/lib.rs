//! Sequential collection primitives built on single-owner links.
#![no_std]

extern crate alloc;

pub mod linked_list;
