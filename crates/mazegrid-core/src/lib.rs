//! Core grid types for maze construction and traversal.
//!
//! A [`Maze`] is a row-major grid of [`Cell`]s, each carrying its position,
//! a flat [`CellId`] (`id = row * cols + col`, a bijection for fixed column
//! count), and a [`CellKind`] saying whether the cell is traversable.
//!
//! This crate holds plain data only. Generation lives in `mazegrid-gen`,
//! graph building and search in `mazegrid-paths`.

pub mod cell;
pub mod maze;

pub use cell::{Cell, CellId, CellKind};
pub use maze::Maze;
