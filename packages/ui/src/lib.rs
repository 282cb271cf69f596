//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod theme;
pub use theme::{
    toggle_color_mode, use_color_mode, ColorMode, ColorModeKey, ColorModeSignal, Theme,
    ThemeProvider,
};

mod navbar;
pub use navbar::Navbar;

mod storage;
pub use storage::{use_store, StoreProvider};

mod session;
pub use session::{use_api, use_session, SessionProvider, SessionSignal};

mod uploader;
pub use uploader::{use_uploader, Uploader};

pub mod toast;
pub use toast::{push_notice, use_toasts, Toast, ToastProvider, Toasts};

mod login;
pub use login::LoginForm;

pub mod file_upload;
pub use file_upload::FileUpload;

mod data_preview;
pub use data_preview::DataPreview;

mod dashboard;
pub use dashboard::{Dashboard, StatsCard};
