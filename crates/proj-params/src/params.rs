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

//! PROJ.4 parameter-string tokenization.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

/// Errors raised by strict parameter lookups.
///
/// Parsing itself never fails: malformed tokens degrade silently to a
/// smaller mapping. This error only exists for consumers that require a
/// particular parameter to be present.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing required parameter: +{0}")]
    Missing(String),
}

/// A mapping of PROJ.4 parameter names to their textual values.
///
/// Keys are unique; duplicate `+key=value` tokens resolve to the last
/// occurrence. Insertion order is irrelevant for downstream use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    values: HashMap<String, String>,
}

impl ParamMap {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a PROJ.4 parameter string into a key/value mapping.
    ///
    /// Leading `+` characters are stripped from the whole string, tokens are
    /// split at each `" +"` boundary, and each token is split on its *first*
    /// `=` into a (key, value) pair. A token like `a==1` therefore maps
    /// `a` to `"=1"`. Tokens without an `=` (bare flags such as `no_defs`)
    /// contribute nothing to the mapping and no error is raised.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::parse_reporting(input).0
    }

    /// Parses like [`ParamMap::parse`] but also returns the tokens that were
    /// dropped (flag-only or otherwise value-less), in input order.
    #[must_use]
    pub fn parse_reporting(input: &str) -> (Self, Vec<String>) {
        let mut values = HashMap::new();
        let mut ignored = Vec::new();

        for token in input.trim_start_matches('+').split(" +") {
            match token.split_once('=') {
                Some((key, value)) => {
                    values.insert(key.to_owned(), value.to_owned());
                }
                None => {
                    if !token.is_empty() {
                        debug!("ignoring value-less proj token: {token}");
                        ignored.push(token.to_owned());
                    }
                }
            }
        }

        (Self { values }, ignored)
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Looks up a parameter the caller cannot proceed without.
    pub fn require(&self, key: &str) -> Result<&str, ParamError> {
        self.get(key).ok_or_else(|| ParamError::Missing(key.to_owned()))
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of parameters in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the mapping holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over (name, value) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-serializes the mapping into `+key=value` token form.
    ///
    /// Tokens are emitted in sorted key order so the output is stable.
    /// Re-parsing the result yields an equal mapping. Flag-only tokens from
    /// the original input are not representable here; that information loss
    /// is expected, not a bug.
    #[must_use]
    pub fn to_proj_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_unstable_by_key(|(k, _)| *k);

        pairs
            .iter()
            .map(|(k, v)| format!("+{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTM_NAD83: &str = "+proj=utm +zone=11 +ellps=GRS80 +datum=NAD83 +units=m +no_defs";

    #[test]
    fn test_parse_utm_string() {
        let params = ParamMap::parse(UTM_NAD83);
        assert_eq!(params.len(), 5);
        assert_eq!(params.get("proj"), Some("utm"));
        assert_eq!(params.get("zone"), Some("11"));
        assert_eq!(params.get("ellps"), Some("GRS80"));
        assert_eq!(params.get("datum"), Some("NAD83"));
        assert_eq!(params.get("units"), Some("m"));
        // Flag-only tokens carry no value and are absent
        assert_eq!(params.get("no_defs"), None);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let params = ParamMap::parse("+a=1 +a=2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some("2"));
    }

    #[test]
    fn test_empty_input() {
        let params = ParamMap::parse("");
        assert!(params.is_empty());
    }

    #[test]
    fn test_double_equals_splits_on_first() {
        let params = ParamMap::parse("+a==1");
        assert_eq!(params.get("a"), Some("=1"));
    }

    #[test]
    fn test_reporting_surfaces_dropped_tokens() {
        let (params, ignored) = ParamMap::parse_reporting(UTM_NAD83);
        assert_eq!(params.len(), 5);
        assert_eq!(ignored, vec!["no_defs".to_string()]);
    }

    #[test]
    fn test_reporting_nothing_dropped() {
        let (_, ignored) = ParamMap::parse_reporting("+proj=longlat +datum=WGS84");
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_serialize_reparse_idempotent() {
        let params = ParamMap::parse(UTM_NAD83);
        let reparsed = ParamMap::parse(&params.to_proj_string());
        assert_eq!(params, reparsed);
    }

    #[test]
    fn test_require() {
        let params = ParamMap::parse("+zone=11");
        assert_eq!(params.require("zone"), Ok("11"));
        assert_eq!(
            params.require("proj"),
            Err(ParamError::Missing("proj".to_string()))
        );
    }

    #[test]
    fn test_insert_overwrites() {
        let mut params = ParamMap::parse("+proj=utm");
        params.insert("proj", "longlat");
        assert_eq!(params.get("proj"), Some("longlat"));
    }
}
