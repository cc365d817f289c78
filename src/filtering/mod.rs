/*! Filtering utilities

Filters operate on sentence candidates.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [sentence::Length] for example)
- [filter::FilterMut] is implemented for filters that do have state (see [sentence::Unique], which remembers what it has already seen).
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use filter::FilterMut;
pub use sentence::{Length, NoLink, Script, ScriptMatcher, Unique};
