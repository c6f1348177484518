pub mod catalog;
pub mod clipboard;
pub mod components;

// Re-export the component surface for easier usage
pub use components::{
    AnimatedText, Announcement, Button, ButtonVariant, Chip, ChipTone, CopyField, FallbackImage,
    TabItem, Tabs,
};
