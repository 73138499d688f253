pub mod bearer;
pub mod response;
