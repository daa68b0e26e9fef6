//! Platform-agnostic core of the ambient layer: the particle field
//! simulation and the spring-smoothed cursor.
//!
//! Nothing here touches the DOM. The web front-end supplies a [`Painter`],
//! a [`FrameScheduler`], a [`HoverProbe`] and a [`CursorHost`]; everything
//! else is plain data that can be driven from tests.

pub mod color;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod field;
pub mod hover;
pub mod mode;
pub mod paint;
pub mod pointer;
pub mod spring;
pub mod task;

pub use color::{Rgb, Rgba};
pub use config::{CursorTuning, DeviceClass, FieldConfig, FieldTuning, Viewport};
pub use cursor::{CursorEvent, CursorHost, CursorMount};
pub use debounce::Debouncer;
pub use error::AmbientError;
pub use field::{edge_opacity, wrap_axis, Edge, Particle, ParticleField};
pub use hover::{ElementTraits, HoverProbe};
pub use mode::DisplayMode;
pub use paint::{NullPainter, Painter};
pub use pointer::{halo_target, CursorFrame, HaloStyle, PointerPrecision, PointerTracker};
pub use spring::{Spring, SpringConfig};
pub use task::{FrameScheduler, FrameTask};
