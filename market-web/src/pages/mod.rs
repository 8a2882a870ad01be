//! Page modules

pub mod home;
pub mod profile;
pub mod sell;

pub use home::HomePage;
pub use profile::ProfilePage;
pub use sell::SellPage;
