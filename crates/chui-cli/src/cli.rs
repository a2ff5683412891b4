//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chui - Compose infrastructure apps into one deployable stack
#[derive(Parser, Debug)]
#[command(name = "chui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Active environment
    #[arg(short, long, global = true, env = "CHUI_ENV")]
    pub env: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a Chui project
    ///
    /// Writes a new chui.yaml when the directory has none, then clones and
    /// prepares every app it lists.
    ///
    /// Examples:
    ///   chui init my-stack --domain example.com --name acme --environment staging
    ///   chui init            # clone the apps of an existing chui.yaml
    Init {
        /// Project directory (created if missing)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Root domain for new projects
        #[arg(long)]
        domain: Option<String>,

        /// Global app name for new projects
        #[arg(long)]
        name: Option<String>,

        /// Pulumi organization for new projects (defaults to the app name)
        #[arg(long)]
        org: Option<String>,

        /// Environments to declare in a new project
        #[arg(long = "environment")]
        environments: Vec<String>,
    },

    /// Manage environments
    Env {
        #[command(subcommand)]
        action: EnvAction,
    },

    /// Inspect the merged configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Merge and validate the configuration for the active environment
    Validate,

    /// Manage apps
    App {
        #[command(subcommand)]
        action: AppAction,
    },

    /// Print the stack reference of an installed app
    Stack {
        /// Stack selector (defaults to the environment name)
        #[arg(long, env = "CHUI_STACK")]
        stack: Option<String>,

        #[command(subcommand)]
        lookup: StackLookup,
    },
}

/// Environment actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EnvAction {
    /// Add an environment, replacing one with the same name
    Add {
        name: String,

        /// Explicit domain instead of `<name>.<rootDomain>`
        #[arg(long)]
        domain: Option<String>,
    },

    /// List environments and their domains
    List,
}

/// Configuration actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the merged configuration
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// App actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Clone an app into the project and register it
    ///
    /// Examples:
    ///   chui app add https://github.com/chuistack/chui-auth-keycloak --name auth --type auth
    Add {
        /// Git URL or local path of the app
        source: String,

        /// Directory (and stack) name of the app
        #[arg(long)]
        name: String,

        /// App role, e.g. ingress-controller, cert-manager, auth
        #[arg(long = "type")]
        app_type: String,

        /// Provider variant, e.g. kube-nginx
        #[arg(long)]
        variant: Option<String>,

        /// Version to record for the app
        #[arg(long)]
        version: Option<String>,

        /// Branch, tag or commit to check out
        #[arg(long)]
        revision: Option<String>,

        /// Do not run `npm install` in the app
        #[arg(long)]
        skip_install: bool,
    },

    /// List the official app catalog
    Catalog {
        /// Fetch again instead of using a cached copy
        #[arg(long)]
        refresh: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Catalog location
        #[arg(long, env = "CHUI_CATALOG_URL")]
        url: Option<String>,
    },

    /// Print the name of the app containing the current directory
    Current,
}

/// How to find the app whose stack is printed
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum StackLookup {
    /// By role, e.g. ingress-controller
    Role { role: String },
    /// By app name
    Name { name: String },
    /// By source URL
    Source { source: String },
}
