//! Interactive menu
//!
//! Shows the numbered operations, reads a choice, prompts for the action's
//! parameters and runs it. One action runs at a time; the loop ends on
//! choice 7 or when input is exhausted.

use std::path::PathBuf;
use std::str::FromStr;

use sbm_core::ObjectStore;

use super::input::LineReader;
use super::{get, ls, mb, policy, put, rb};
use crate::exit_code::ExitCode;
use crate::output::Formatter;

const BANNER_WIDTH: usize = 45;

/// Confirmation word required before deleting a bucket
const CONFIRM_DELETE: &str = "YES";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    CreateBucket,
    ListBuckets,
    Upload,
    Download,
    PublicReadPolicy,
    DeleteBucket,
    Exit,
}

/// Why a menu answer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange,
}

impl FromStr for Choice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let n: i64 = match s.parse() {
            Ok(n) => n,
            // Too large for i64 but still a number
            Err(_) if is_integer(s) => return Err(ChoiceError::OutOfRange),
            Err(_) => return Err(ChoiceError::NotANumber),
        };
        match n {
            1 => Ok(Self::CreateBucket),
            2 => Ok(Self::ListBuckets),
            3 => Ok(Self::Upload),
            4 => Ok(Self::Download),
            5 => Ok(Self::PublicReadPolicy),
            6 => Ok(Self::DeleteBucket),
            7 => Ok(Self::Exit),
            _ => Err(ChoiceError::OutOfRange),
        }
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The interactive bucket management menu
pub struct Menu<'a> {
    store: &'a dyn ObjectStore,
    formatter: &'a Formatter,
    default_region: String,
}

impl<'a> Menu<'a> {
    pub fn new(
        store: &'a dyn ObjectStore,
        formatter: &'a Formatter,
        default_region: impl Into<String>,
    ) -> Self {
        Self {
            store,
            formatter,
            default_region: default_region.into(),
        }
    }

    /// Run until the user exits or input ends
    pub async fn run(&self, input: &mut dyn LineReader) -> ExitCode {
        loop {
            self.print_menu();

            let Some(answer) = input.read_line("Please select an operation (1-7): ") else {
                self.formatter.println("");
                tracing::debug!("Input closed, leaving menu");
                return ExitCode::Success;
            };

            let choice = match answer.parse::<Choice>() {
                Ok(choice) => choice,
                Err(ChoiceError::NotANumber) => {
                    self.formatter.println("Please enter a number from 1-7");
                    continue;
                }
                Err(ChoiceError::OutOfRange) => {
                    self.formatter.println("Invalid choice, please try again");
                    continue;
                }
            };

            if choice == Choice::Exit {
                self.formatter.println("Exiting. Goodbye!");
                return ExitCode::Success;
            }

            match self.dispatch(choice, input).await {
                Some(code) if code.is_success() => tracing::debug!(?choice, "Action finished"),
                Some(code) => tracing::debug!(?choice, outcome = %code, "Action failed"),
                None => {
                    tracing::debug!("Input closed during prompt, leaving menu");
                    return ExitCode::Success;
                }
            }
        }
    }

    fn print_menu(&self) {
        let rule = "=".repeat(BANNER_WIDTH);
        self.formatter.println("");
        self.formatter.println(&rule);
        self.formatter.heading("   S3 Bucket Management System");
        self.formatter.println(&rule);
        self.formatter.println("1. Create New Bucket");
        self.formatter.println("2. List existing buckets");
        self.formatter.println("3. Upload file to bucket");
        self.formatter.println("4. Download file from bucket");
        self.formatter.println("5. Add public read policy to bucket");
        self.formatter.println("6. Delete bucket and all contents");
        self.formatter.println("7. Exit\n");
    }

    /// Prompt for the action's parameters and run it
    ///
    /// Returns `None` when input ends before all parameters were read.
    async fn dispatch(&self, choice: Choice, input: &mut dyn LineReader) -> Option<ExitCode> {
        let store = self.store;
        let formatter = self.formatter;

        let code = match choice {
            Choice::CreateBucket => {
                let bucket = input.read_line("Please enter the bucket name to create: ")?;
                let region = input.read_line(&format!(
                    "Enter region (default: {}): ",
                    self.default_region
                ))?;
                let region = if region.is_empty() {
                    self.default_region.clone()
                } else {
                    region
                };
                mb::execute(store, mb::MbArgs { bucket, region }, formatter).await
            }
            Choice::ListBuckets => ls::execute(store, formatter).await,
            Choice::Upload => {
                let file = input.read_line("Enter the filename to upload: ")?;
                let bucket = input.read_line("Enter bucket name: ")?;
                let key = input
                    .read_line("Enter object name (optional, press enter to use filename): ")?;
                let args = put::PutArgs {
                    file: PathBuf::from(file),
                    bucket,
                    key: (!key.is_empty()).then_some(key),
                };
                put::execute(store, args, formatter).await
            }
            Choice::Download => {
                let bucket = input.read_line("Enter bucket name: ")?;
                let key = input.read_line("Enter object name: ")?;
                let file = input.read_line("Enter local filename to save as: ")?;
                let args = get::GetArgs {
                    bucket,
                    key,
                    file: PathBuf::from(file),
                };
                get::execute(store, args, formatter).await
            }
            Choice::PublicReadPolicy => {
                let bucket =
                    input.read_line("Enter the bucket to apply public read policy to: ")?;
                policy::execute(store, &bucket, formatter).await
            }
            Choice::DeleteBucket => {
                let bucket = input.read_line(
                    "Enter bucket to delete (CAUTION: ALL CONTENTS WILL BE DELETED): ",
                )?;
                let confirm = input.read_line(&format!(
                    "Type '{CONFIRM_DELETE}' to confirm deletion of bucket '{bucket}': "
                ))?;
                if confirm == CONFIRM_DELETE {
                    rb::execute(store, &bucket, formatter).await
                } else {
                    formatter.println("Deletion cancelled.");
                    ExitCode::Success
                }
            }
            Choice::Exit => ExitCode::Success,
        };

        Some(code)
    }
}
