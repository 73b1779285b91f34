// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - scene loading and mesh export

mod scene;
mod stl;

pub use scene::{load_scene, parse_scene_json, parse_scene_toml, scene_to_json, SceneNode};
pub use stl::{
    export_stl, parse_ascii_stl, to_ascii_stl, write_ascii_stl, write_binary_stl, AsciiStl,
    UpAxis,
};
