pub mod list;

pub use list::ServiceSearchPage;
