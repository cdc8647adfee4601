pub mod delete;
pub mod get;
pub mod set;

pub use delete::delete_handler;
pub use get::get_handler;
pub use set::set_handler;
