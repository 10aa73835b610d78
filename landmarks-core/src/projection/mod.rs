// Disposable view models derived from store snapshots.

mod list;
mod marker;
mod viewport;

pub use self::{list::*, marker::*, viewport::*};
