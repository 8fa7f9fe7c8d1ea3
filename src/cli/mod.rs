use clap::{Parser, Subcommand};

/// `Vibe Code` - Quarterly peer feedback from the terminal.
#[derive(Parser, Debug)]
#[command(name = "vibecode")]
#[command(version = "0.1.0")]
#[command(about = "Acme Quarterly Peer Feedback companion.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a demo session (no real authentication)
    Login {
        /// Work email to sign in with
        #[arg(long)]
        email: Option<String>,

        /// Sign in with the Admin / HR role
        #[arg(long)]
        admin: bool,
    },

    /// End the current session
    Logout,

    /// Show your feedback dashboard for the quarter
    Dashboard,

    /// Write feedback for a peer (interactive)
    Give {
        /// Peer id from the dashboard (default: the pending reviewer)
        #[arg(long, default_value = "1")]
        peer: String,
    },

    /// Request peer feedback for yourself (interactive)
    Request,

    /// Show your AI-generated feedback summary
    Summary,

    /// Show the HR dashboard (admin role required)
    Admin,

    /// Run a one-off tone check on a piece of text
    Tone {
        /// Text to analyze
        text: String,
    },
}
