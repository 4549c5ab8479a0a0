pub use super::item::Entity as Item;
pub use super::user::Entity as User;
