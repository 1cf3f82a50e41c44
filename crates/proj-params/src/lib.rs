// Copyright 2025 GeoViz Desktop contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parser for PROJ.4-style projection parameter strings.
//!
//! A PROJ.4 string is a compact textual encoding of coordinate reference
//! system parameters as whitespace-separated `+key=value` tokens, e.g.
//!
//! ```text
//! +proj=utm +zone=11 +ellps=GRS80 +datum=NAD83 +units=m +no_defs
//! ```
//!
//! This crate tokenizes such a string into a key/value [`ParamMap`] suitable
//! for inspecting CRS parameters before handing the string to a projection
//! library. Flag-only tokens (no `=`, like `no_defs`) carry no value and are
//! dropped from the mapping; [`ParamMap::parse_reporting`] surfaces them
//! instead of discarding them silently.
//!
//! # Quick start
//!
//! ```
//! use proj_params::ParamMap;
//!
//! let params = ParamMap::parse("+proj=utm +zone=11 +datum=NAD83 +no_defs");
//! assert_eq!(params.get("proj"), Some("utm"));
//! assert_eq!(params.get("zone"), Some("11"));
//! assert_eq!(params.get("no_defs"), None); // flags carry no value
//! ```
//!
//! Consumers that depend on a specific parameter can layer strictness on top
//! of the lossy parse:
//!
//! ```
//! use proj_params::ParamMap;
//!
//! let params = ParamMap::parse("+zone=11");
//! assert!(params.require("proj").is_err());
//! ```

mod params;

pub use params::{ParamError, ParamMap};
