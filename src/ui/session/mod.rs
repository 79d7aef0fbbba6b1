pub mod context;
pub mod login_form;
pub mod register_form;
pub mod storage;

pub use context::{
    SessionContext, SessionState, logout, provide_session_context, use_session_context,
};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
