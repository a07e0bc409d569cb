//! Create and register forms
//!
//! Each form keeps its fields in `use_form`: values are trimmed on submit, a
//! second submit while one is pending is ignored, and failures show inline
//! without touching the fields.

mod add_user_to_gym;
mod create_gym;
mod field;
mod register_gym_manager;
mod register_trainer;

pub use add_user_to_gym::AddUserToGymForm;
pub use create_gym::CreateGymForm;
pub use field::{FormError, SelectField, SubmitButton, TextField};
pub use register_gym_manager::RegisterGymManagerForm;
pub use register_trainer::RegisterTrainerForm;
