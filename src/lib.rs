//! platonic-stl - Generate the five Platonic solids as 3D-printable ASCII STL meshes

pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod solids;
