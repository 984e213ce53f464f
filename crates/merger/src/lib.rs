mod error;
mod item;
mod merger;
mod rank;
mod sorted_list;

pub use error::MergeError;
pub use item::Item;
pub use merger::{Iter, Merger};
pub use rank::{compare_ranks, Rank, Ranked};
pub use sorted_list::SortedList;
