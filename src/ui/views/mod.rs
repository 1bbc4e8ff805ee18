pub mod check;
pub mod home;
pub mod sign_in;
