pub mod login_service;
pub mod telemetry;

pub use login_service::LoginService;
pub use telemetry::init_tracing;
