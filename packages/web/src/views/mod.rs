mod home;
pub use home::Home;

mod for_you;
pub use for_you::ForYou;
