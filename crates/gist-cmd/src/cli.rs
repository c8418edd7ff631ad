//! Flag surface and command planning.
//!
//! The CLI is flag-driven: one optional positional reference plus a handful
//! of mutually-exclusive operation flags. [`Cli::plan`] validates the
//! combination and produces exactly one [`Operation`], before any
//! credential read or network access. When a reference is present the
//! first matching operation flag wins, in the order update, delete, show.

use clap::Parser;

use gist_core::cmdutil::UsageError;

use crate::resolve::Reference;

/// List, show, create, update, and delete gists from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "gist",
    version,
    about = "Manage gists on the hosted snippet service",
    long_about = "List your gists, show one by id or list index, and create, \
                  update, or delete them. Content for create and update is \
                  read from standard input."
)]
pub struct Cli {
    /// Gist id or list index, optionally followed by /FILE to select one file.
    #[arg(value_name = "ID[/FILE]")]
    targets: Vec<String>,

    /// Maximum number of items or files to print; 0 or less prints all.
    #[arg(
        short = 'n',
        long = "limit",
        default_value_t = 0,
        value_name = "N",
        allow_negative_numbers = true
    )]
    limit: i64,

    /// List starred gists instead of owned ones.
    #[arg(short, long)]
    starred: bool,

    /// Create a new public gist named FILE from standard input.
    #[arg(short, long, value_name = "FILE")]
    create: Option<String>,

    /// Update the gist at ID from standard input.
    #[arg(short, long)]
    update: bool,

    /// Description for the gist. On update, absent or empty leaves the
    /// existing description unchanged.
    #[arg(short, long, value_name = "TEXT")]
    description: Option<String>,

    /// Delete the gist at ID.
    #[arg(long)]
    delete: bool,

    /// Verbose output (headers, timestamps, URLs).
    #[arg(short, long)]
    verbose: bool,
}

/// The single operation selected for this invocation.
///
/// Each variant carries only the fields its operation needs; building one
/// is the whole of flag validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// List owned or starred gists.
    List {
        /// Use the starred list as the source.
        starred: bool,
        /// Item cap; 0 or less means unbounded.
        limit: i64,
        /// Print timestamps and URLs per item.
        verbose: bool,
    },
    /// Show one gist's files.
    Show {
        /// The gist to show.
        target: Reference,
        /// File cap; 0 or less means unbounded.
        limit: i64,
        /// Print a header block and per-file annotations.
        verbose: bool,
    },
    /// Create a single-file public gist from standard input.
    Create {
        /// Name of the file inside the new gist.
        file_name: String,
        /// Description; may be empty.
        description: String,
    },
    /// Replace one file's content from standard input.
    Update {
        /// The gist to update.
        target: Reference,
        /// Replacement description, or `None` to keep the existing one.
        description: Option<String>,
    },
    /// Delete a gist.
    Delete {
        /// The gist to delete.
        target: Reference,
    },
}

/// Build the usage error for a flag that conflicts with an operation.
fn conflict(flag: &str, action: &str) -> UsageError {
    UsageError(format!("cannot use {flag} when {action}"))
}

impl Cli {
    /// Validate the flag combination and select exactly one operation.
    ///
    /// Pure: no I/O, no credential reads. Every rejection is a
    /// [`UsageError`] the binary maps to exit code 1.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] on conflicting flags, multiple positional
    /// arguments, or a missing required reference.
    pub fn plan(&self) -> Result<Operation, UsageError> {
        if self.targets.len() > 1 {
            return Err(UsageError::new("only one gist reference may be given"));
        }

        if let Some(raw) = self.targets.first() {
            let target = Reference::parse(raw);

            if self.update {
                let forbidden = [
                    (self.delete, "--delete"),
                    (self.limit != 0, "--limit"),
                    (self.starred, "--starred"),
                    (self.verbose, "--verbose"),
                    (self.create.is_some(), "--create"),
                ];
                for (set, flag) in forbidden {
                    if set {
                        return Err(conflict(flag, "updating a gist"));
                    }
                }
                // An empty description is the "leave unchanged" sentinel,
                // same as not passing -d at all.
                let description = self.description.clone().filter(|d| !d.is_empty());
                return Ok(Operation::Update {
                    target,
                    description,
                });
            }

            if self.delete {
                let forbidden = [
                    (self.limit != 0, "--limit"),
                    (self.starred, "--starred"),
                    (self.verbose, "--verbose"),
                    (self.create.is_some(), "--create"),
                ];
                for (set, flag) in forbidden {
                    if set {
                        return Err(conflict(flag, "deleting a gist"));
                    }
                }
                if target.file_name.is_some() {
                    return Err(UsageError::new(
                        "a file name cannot be given when deleting; pass the gist id alone",
                    ));
                }
                return Ok(Operation::Delete { target });
            }

            if self.starred {
                return Err(conflict("--starred", "showing a gist"));
            }
            if self.create.is_some() {
                return Err(conflict("--create", "showing a gist"));
            }
            return Ok(Operation::Show {
                target,
                limit: self.limit,
                verbose: self.verbose,
            });
        }

        if let Some(ref file_name) = self.create {
            let forbidden = [
                (self.delete, "--delete"),
                (self.limit != 0, "--limit"),
                (self.starred, "--starred"),
                (self.update, "--update"),
                (self.verbose, "--verbose"),
            ];
            for (set, flag) in forbidden {
                if set {
                    return Err(conflict(flag, "creating a gist"));
                }
            }
            return Ok(Operation::Create {
                file_name: file_name.clone(),
                description: self.description.clone().unwrap_or_default(),
            });
        }

        if self.update {
            return Err(UsageError::new("--update requires a gist reference"));
        }
        if self.delete {
            return Err(UsageError::new("--delete requires a gist reference"));
        }

        Ok(Operation::List {
            starred: self.starred,
            limit: self.limit,
            verbose: self.verbose,
        })
    }
}

impl Operation {
    /// Run the selected operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> anyhow::Result<()> {
        match self {
            Self::List {
                starred,
                limit,
                verbose,
            } => crate::list::run(factory, *starred, *limit, *verbose).await,
            Self::Show {
                target,
                limit,
                verbose,
            } => crate::show::run(factory, target, *limit, *verbose).await,
            Self::Create {
                file_name,
                description,
            } => crate::create::run(factory, file_name, description).await,
            Self::Update {
                target,
                description,
            } => crate::update::run(factory, target, description.as_deref()).await,
            Self::Delete { target } => crate::delete::run(factory, target).await,
        }
    }
}
