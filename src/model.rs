// Copyright 2026 Modlinker Authors
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

//! Shared domain types used across catalog resolution, formatting, and
//! pagination.

use serde::Serialize;

/// One workshop item resolved from the catalog, with its author attached and
/// its version label already derived from the raw tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultItem {
    pub title: String,
    pub url: String,
    pub author_name: String,
    pub author_url: String,
    pub version: Option<String>,
}
