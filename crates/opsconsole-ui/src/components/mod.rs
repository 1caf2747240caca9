//! Reusable layout components

mod account_badge;
mod breadcrumbs;
mod iconify;

pub use account_badge::*;
pub use breadcrumbs::*;
pub use iconify::*;
