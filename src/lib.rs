//! An ordered symbol table backed by a left-leaning red black tree.
//!
//! `RedBlackMap` keeps its keys ordered by a caller-supplied comparator and supports lookups,
//! insertions, deletions, and order statistics (`rank`, `select`, `floor`, `ceil`, and range
//! queries) in logarithmic time. `RedBlackSet` is a thin set over the same tree.

mod entry;
pub mod red_black_tree;
