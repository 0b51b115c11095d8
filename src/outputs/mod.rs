mod list;
pub use list::List;
mod export;
pub use export::Export;
