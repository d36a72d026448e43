//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod article;
pub mod blog;
pub mod home;
pub mod map;

pub use about::AboutPage;
pub use article::ArticlePage;
pub use blog::BlogPage;
pub use home::HomePage;
pub use map::MapPage;
