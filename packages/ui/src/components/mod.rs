//! Small form and feedback primitives shared by every view.

mod alert;
pub use alert::{Alert, AlertVariant};

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;
