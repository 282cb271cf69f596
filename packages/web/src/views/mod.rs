mod home;
pub use home::Home;

mod upload;
pub use upload::UploadView;

mod dashboard;
pub use dashboard::Dashboard;
