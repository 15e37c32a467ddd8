#![allow(missing_docs)]

mod reference;

const fn main() {}
