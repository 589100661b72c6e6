mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod document_view;
pub use document_view::DocumentView;

mod ask_ai;
pub use ask_ai::AskAi;
