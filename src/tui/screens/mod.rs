//! Screen modules for the movietui interface

pub mod add;
pub mod delete;
pub mod edit;
pub mod home;
pub mod list;

pub use add::AddScreen;
pub use delete::DeleteScreen;
pub use edit::EditScreen;
pub use home::HomeScreen;
pub use list::ListScreen;
