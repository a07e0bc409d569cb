mod add_role;
mod auth;
mod dashboard;
mod gym;
mod member;
mod not_found;
mod trainer;

pub use add_role::AddRolePage;
pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use gym::GymPage;
pub use member::MemberDashboard;
pub use not_found::NotFoundPage;
pub use trainer::TrainerDashboard;
