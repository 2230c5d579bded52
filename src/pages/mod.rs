//! Top-level Views
//!
//! One component per route.

mod catalogue;
mod detail;
mod login;

pub use catalogue::CataloguePage;
pub use detail::DetailPage;
pub use login::LoginPage;
