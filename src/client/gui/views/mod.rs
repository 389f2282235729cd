pub mod logger;
pub mod login;
pub mod signup;
pub mod workspace;
