//! The presentation side of the gridpath visualizer.
//!
//! The search engine knows nothing about screens or input. This crate holds
//! everything that does: a [`Screen`] buffer models draw into, frame diffing,
//! input [`Msg`]s, the [`Renderer`] and [`InputSource`] capabilities a
//! back-end provides, and the [`App`] loop tying a [`Model`] to a
//! [`Driver`].

pub mod app;
pub mod messages;
pub mod screen;
pub mod style;

pub use app::{App, AppConfig, Context, Driver, Effect, InputSource, Live, Model, Renderer};
pub use messages::{Key, Msg, MouseAction};
pub use screen::{Frame, FrameCell, Glyph, Screen, compute_frame};
pub use style::{AttrMask, Color, Style};
