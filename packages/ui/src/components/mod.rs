//! Shared form and feedback controls styled by `components.css`.

use dioxus::prelude::*;

mod button;
pub use button::{Button, ButtonSize, ButtonVariant, IconButton};

mod input;
pub use input::{Input, Label};

mod feedback;
pub use feedback::{Alert, Card, Progress};

pub(crate) const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");
