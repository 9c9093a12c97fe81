//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a backend module in place",
    long_about = "Modgen creates a module directory with six convention-named \
                  empty source files under src/modules of the nearest \
                  enclosing project (found via package.json or tsconfig.json).",
    after_help = "EXAMPLES:\n\
        \x20 modgen --module billing\n\
        \x20 modgen --module apiKeys --dry-run\n\
        \x20 modgen -v --module users"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the module to create.
    ///
    /// Used verbatim as the directory name and as the prefix of the six
    /// generated files.
    #[arg(
        long = "module",
        value_name = "NAME",
        required = true,
        help = "Name of the module to create"
    )]
    pub module: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
