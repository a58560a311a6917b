//! # Pictor Layout
//!
//! A tree of [`RenderObject`] nodes laid out in two phases. Every node first
//! reports a [`Size`](pictor_core::Size) for the space its parent offers, then
//! paints itself into a [`Canvas`](pictor_core::Canvas) view of the size its
//! parent settled on, handing narrower sub-views to its children.
//!
//! Leaves: [`ColoredBox`], [`Painter`], [`Text`].
//! Containers: [`Padding`], [`Align`], [`Row`], [`Column`], [`Stack`], [`Border`].

pub mod align;
pub mod alignment;
pub mod border;
pub mod cache;
pub mod colored_box;
pub mod flex;
pub mod padding;
pub mod painter;
pub mod render_object;
pub mod stack;
pub mod text;
pub mod text_service;

pub use align::Align;
pub use alignment::{Anchor, MainAxisAlignment, MainAxisSize};
pub use border::Border;
pub use cache::SizeCache;
pub use colored_box::ColoredBox;
pub use flex::{Column, Row};
pub use padding::{EdgeInsets, Padding};
pub use painter::Painter;
pub use render_object::{render, BoxedRenderObject, RenderObject};
pub use stack::Stack;
pub use text::{Text, TEXT_PADDING};
pub use text_service::{FixedAdvanceTextService, FontDescriptor, TextService};
