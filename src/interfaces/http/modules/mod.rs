pub mod breeds;
pub mod health;
pub mod pets;
pub mod users;
