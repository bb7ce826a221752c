pub mod form;

pub use form::LoginForm;
