pub mod draft;
pub mod events;
pub mod navigation;

pub use draft::InMemoryDraftStore;
pub use events::{WatchWizardEventPort, WizardSnapshot};
pub use navigation::ChannelNavigator;
