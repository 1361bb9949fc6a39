//! Intermediate Representation (IR) for study notes.
//!
//! The notes parser produces a flat list of [`nodes::FlatBlock`]s, which
//! `common::flat_to_nested` groups into a [`nodes::Document`]. Serializers then
//! consume the document either directly or as an [`events::Event`] stream.

pub mod events;
pub mod nodes;
