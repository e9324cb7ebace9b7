mod about;
mod home;
mod not_found;
pub mod upload;

pub use about::About;
pub use home::Home;
pub use not_found::NotFound;
pub use upload::Upload;
