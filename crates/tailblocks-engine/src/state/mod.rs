//! Instance-local interaction state.
//!
//! Each machine is owned by exactly one rendered widget and only changes
//! through its own transition methods. Invalid requests (an out-of-range tab,
//! closing a menu that is not open) are ignored rather than reported.

pub mod disclosure;
pub mod dropdown;
pub mod field;
pub mod tabs;

pub use disclosure::{Accordion, Disclosure};
pub use dropdown::DropdownMenu;
pub use field::ControlledField;
pub use tabs::TabSelector;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("A tab selector needs at least one tab")]
    NoTabs,
}
