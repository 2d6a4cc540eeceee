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

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(
    name = "modlinker",
    version,
    about = "Workshop link bot core: trigger parsing, result formatting, reply pagination"
)]
pub struct Cli {
    /// Path to a modlinker.toml config (defaults baked in when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan comment text for link triggers and print the parsed requests
    Scan(ScanArgs),

    /// Run the full reply pipeline against a catalog fixture
    Reply(ReplyArgs),

    /// Print the workshop search URL for a query
    Url(UrlArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Comment text (reads stdin when omitted)
    pub text: Option<String>,

    /// Read comment text from a file instead
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ReplyArgs {
    /// Comment text (reads stdin when omitted)
    pub text: Option<String>,

    /// Read comment text from a file instead
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Catalog fixture JSON with `files` and `authors` arrays
    #[arg(long)]
    pub fixture: PathBuf,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Query text
    pub query: String,

    /// Item kind ("mod" or "scenario")
    #[arg(long, default_value = "mod")]
    pub kind: String,

    /// Version label filter, e.g. A17
    #[arg(long)]
    pub version: Option<String>,
}
