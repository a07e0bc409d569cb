pub mod forms;
mod gym_list;
mod user_name;

pub use gym_list::{ManagedGymList, UserGymList};
pub use user_name::Greeting;
