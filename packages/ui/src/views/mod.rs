mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod landing;
pub use landing::{Landing, GROWTH_HIGHLIGHTS, LEARNING_HIGHLIGHTS};
