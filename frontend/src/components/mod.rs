pub mod footer;
pub mod handlers;
pub mod header;
pub mod loader;
pub mod mask_gallery;
pub mod navbar;
pub mod preview_area;
pub mod results;
pub mod upload_section;
pub mod utils;

pub use footer::Footer;
pub use loader::Loader;
pub use mask_gallery::MaskGallery;
pub use navbar::Navbar;
