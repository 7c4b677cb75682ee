//! An owned linked list implementation.
//!
//! In an owned linked list, the container allocates a node per element and
//! each node owns the link to its successor. This is in contrast to an
//! intrusive linked list, where the caller embeds the link in its own
//! structures and stays responsible for node lifetimes.
//!
//! # Examples
//!
//! ```
//! use forward_collections::linked_list::single::list::SingleList;
//!
//! let mut list = SingleList::new();
//!
//! list.push_front(1);
//! list.push_front(2);
//! list.push_front(3);
//!
//! assert_eq!(list.len(), 3);
//!
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![3, 2, 1]);
//! ```
pub mod single;
