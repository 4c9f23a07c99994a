//! Overlapping, decorated windows for terminal user interfaces.
//!
//! A [`window::WindowManager`] stacks [`window::Window`]s over an area of the
//! terminal, routes mouse input to the frontmost eligible window (honouring
//! modal windows), delegates keyboard focus to window content and draws the
//! stack back to front through a clipped [`ui::UiFrame`].

pub mod components;
pub mod constants;
pub mod event_loop;
pub mod input;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
