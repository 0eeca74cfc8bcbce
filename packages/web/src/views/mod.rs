mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod project_detail;
pub use project_detail::ProjectDetail;

mod tagsets;
pub use tagsets::Tagsets;

mod settings;
pub use settings::Settings;
