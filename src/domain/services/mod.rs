//! Domain Services
//!
//! Stateless domain logic: the phone format check and the navigation graph.

pub mod navigation;
pub mod validator;

pub use navigation::{NavigationError, NavigationGraph, Navigator};
pub use validator::{is_valid_local_phone_number, LOCAL_PHONE_LEN};
