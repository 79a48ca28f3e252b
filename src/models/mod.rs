pub mod admin_user;
pub mod inquiry;
pub mod spot;
