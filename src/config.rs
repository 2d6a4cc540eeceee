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

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

const DEFAULT_HELP_URL: &str = "https://github.com/modlinker/modlinker/blob/master/COMMANDS.md";

const DEFAULT_FOOTER: &str = "\n\n*****\n^(I'm a bot | ) \
[^source](https://github.com/modlinker/modlinker) \
^| [^commands](https://github.com/modlinker/modlinker/blob/master/COMMANDS.md)";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hard cap on results per request; generous counts clamp to this.
    pub max_results: usize,
    /// Per-post character budget. The platform allows 10000; leave room.
    pub max_length: usize,
    /// Catalog application id the searches are scoped to.
    pub app_id: u32,
    /// Browse endpoint of the workshop catalog.
    pub workshop_search_url: String,
    /// Item detail URL template; `{id}` is replaced per item.
    pub item_url: String,
    /// Help reference linked from the "no results" message.
    pub help_url: String,
    /// Fixed footer appended to every post.
    pub footer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_length: 9900,
            app_id: 294100,
            workshop_search_url: "https://steamcommunity.com/workshop/browse/".to_string(),
            item_url: "https://steamcommunity.com/sharedfiles/filedetails/?id={id}".to_string(),
            help_url: DEFAULT_HELP_URL.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file when a path is given, else use defaults.
    /// Either way the startup invariants are checked here, once, so the
    /// per-request code never has to.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => read_config(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            anyhow::bail!("max_results must be at least 1");
        }
        if self.footer.len() >= self.max_length {
            anyhow::bail!(
                "footer length {} leaves no room for content (max_length {})",
                self.footer.len(),
                self.max_length
            );
        }
        Url::parse(&self.workshop_search_url).context("parse workshop_search_url")?;
        Ok(())
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: Config = toml::from_str(&text).context("parse modlinker.toml")?;
    Ok(config)
}
