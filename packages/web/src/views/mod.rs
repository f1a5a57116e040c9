mod home;
pub use home::Home;

mod works;
pub use works::Works;

mod contact;
pub use contact::Contact;

mod not_found;
pub use not_found::NotFound;
