pub mod delete_button;

pub use delete_button::DeleteButton;
