mod animated_text;
mod announcement;
mod button;
mod chip;
mod copy_field;
mod fallback_image;
mod tabs;

pub use animated_text::AnimatedText;
pub use announcement::Announcement;
pub use button::{Button, ButtonVariant};
pub use chip::{Chip, ChipTone};
pub use copy_field::CopyField;
pub use fallback_image::FallbackImage;
pub use tabs::{TabItem, Tabs};
