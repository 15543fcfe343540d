#![forbid(unsafe_code)]

//! Metaball page-indicator state.
//!
//! # Role in metadot
//! `metadot-indicator` owns the widget-side state: the row of stationary dots,
//! the moving cursor, and the scroll fraction that positions it. Each frame it
//! walks the dots and emits a `RenderPlan` — plain circles for unselected
//! dots, the metaball blend for the connected one — for the host to replay
//! onto its drawing surface.
//!
//! # How it fits in the system
//! The owning application forwards pager notifications ([`DotField::on_scroll`],
//! [`DotField::on_page_selected`], [`DotField::sync_with_pager`]) and layout
//! events ([`DotField::on_viewport_changed`]); the field settles its invariants
//! on every mutation, so [`DotField::render_into`] only ever reads committed
//! state. There is no ambient subscription mechanism and no background work.

pub mod config;
pub mod field;
pub mod pager;
pub mod sweep;

pub use config::{IndicatorConfig, IndicatorConfigError};
pub use field::{DotField, Padding, Viewport};
pub use pager::Pager;
pub use sweep::CursorSweep;
