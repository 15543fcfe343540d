#![forbid(unsafe_code)]

//! Geometry kernel for the metadot page indicator.
//!
//! # Role in metadot
//! `metadot-geom` is the deterministic geometry engine. Given two circles it
//! decides whether they visually fuse and, when they do, computes the exact
//! closed outline (two cubic segments and two straight segments) that renders
//! as a soft elastic band between them. The output is a [`RenderPlan`] of
//! draw primitives; pixel work belongs to the host [`Surface`].
//!
//! # Primary responsibilities
//! - **Vec2/Circle**: plain value types plus the vector helpers the blend needs.
//! - **FillPath/RenderPlan**: draw primitives replayed through the [`Surface`] trait.
//! - **blend_into**: the metaball blend (proximity growth, containment,
//!   band construction with distance-based thinning).
//!
//! Everything here is a finite, bounded, side-effect-free computation; the
//! only observable effect is the sequence of ops appended to a plan.

pub mod blend;
pub mod circle;
pub mod color;
pub mod headless;
pub mod path;
pub mod plan;
pub mod surface;
pub mod vec;

pub use blend::{BlendParams, blend, blend_into, growth_scale};
pub use circle::Circle;
pub use color::Rgba;
pub use path::{FillPath, PathSeg};
pub use plan::{DrawOp, RenderPlan};
pub use surface::Surface;
pub use vec::Vec2;
