pub mod action_button;
pub mod attachment_list;
pub mod error_banner;
pub mod page;
pub mod prompt_input;
pub mod splash;

pub use action_button::ActionButton;
pub use attachment_list::AttachmentList;
pub use error_banner::ErrorBanner;
pub use page::{Page, PageContent};
pub use prompt_input::PromptInput;
pub use splash::Splash;
