//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod backgrounds;
pub mod blog_post_card;
pub mod distance_slider;
pub mod footer;
pub mod map;
pub mod mobile_navigation;
pub mod navigation;
pub mod newsletter_signup;
pub mod value_proposition_card;

pub use backgrounds::{FloatingShapes, GradientBackground};
pub use blog_post_card::BlogPostCard;
pub use distance_slider::DistanceSlider;
pub use footer::Footer;
pub use map::SimpleMapComponent;
pub use mobile_navigation::MobileNavigation;
pub use navigation::Navigation;
pub use newsletter_signup::NewsletterSignup;
pub use value_proposition_card::ValuePropositionCard;
