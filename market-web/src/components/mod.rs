//! UI Components

pub mod bottom_nav;
pub mod navbar;
pub mod product_card;
pub mod wallet_connect;

pub use bottom_nav::BottomNav;
pub use navbar::Navbar;
pub use product_card::ProductCard;
pub use wallet_connect::WalletConnect;
