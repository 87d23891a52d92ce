use clap::{Parser, Subcommand, ValueEnum};

/// `lessonprompt` - Lesson plan prompt builder.
#[derive(Parser, Debug)]
#[command(name = "lessonprompt")]
#[command(version = "0.1.0")]
#[command(
    about = "Fill in a lesson's details and get a ready-to-paste lesson plan prompt.",
    long_about = None
)]
pub struct Cli {
    /// Form schema revision (v1, v2); overrides config and LESSONPROMPT_SCHEMA
    #[arg(long, global = true)]
    pub schema: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the saved draft
    Show,

    /// List the fields of the active schema and their fallback markers
    Fields,

    /// Set a text field (saved immediately)
    Set {
        /// Field name, e.g. teacher, title, brief
        field: String,

        /// New value; an empty string clears the field
        value: String,
    },

    /// Say whether slides will be attached
    Slides {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Walk through every field interactively
    Fill,

    /// Build the prompt from the saved draft and print it
    Generate {
        /// Also copy the prompt to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Forget the saved draft
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}
