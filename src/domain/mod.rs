//! Domain Layer
//!
//! The sign-in flow without any I/O.
//!
//! ## Structure
//!
//! - `entities/` - The entry controller state machine
//! - `value_objects/` - PhoneInput, ErrorMessage, Screen, NavigationIntent
//! - `services/` - Phone format check, navigation graph
//! - `ports/` - Event sink interface for infrastructure
//!
//! Nothing here touches the terminal, the file system or the environment.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
