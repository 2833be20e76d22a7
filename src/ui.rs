// UI layer: the terminal form built on `dialoguer`, with an `indicatif`
// spinner while the model is thinking. Everything here is synchronous: one
// submission at a time, blocking until the answer arrives.

use crate::api::TextModel;
use crate::oracle::{submit, Outcome};
use crate::prompt::Seeker;
use crate::render;
use anyhow::{Context, Result};
use crossterm::{execute, style::Stylize, terminal::SetTitle};
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PAGE_TITLE: &str = "CrystalIA · Halloween Predictions";
pub const PAGE_ICON: &str = "🎃";
pub const HEADLINE: &str = "🔮 Welcome to your Halloween prediction 🔮";
pub const TAGLINE: &str = "Discover your past and next life... but remember, it is just for fun!";

pub const MISSING_FIELDS: &str =
    "Please fill in all the fields so CrystalIA can see your destiny.";
pub const MISSING_KEY_WARNING: &str =
    "No API key found in the secrets file. Please enter it below.";
pub const KEY_REQUIRED: &str = "The application requires a Google API key to work.";
const THINKING: &str = "CrystalIA is consulting the stars and the lost socks...";

/// The logo shown next to the title. It has to be readable at startup.
#[derive(Debug, Clone)]
pub struct Logo {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl Logo {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to load logo image {}", path.display()))?;
        Ok(Logo {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// One-line description used in the banner.
    pub fn caption(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("[{} · {} bytes]", name, self.len())
    }
}

/// Masked prompt for the API key, used when the secrets file has none.
/// An empty answer is accepted here; the caller decides to halt.
pub fn ask_api_key() -> Result<String> {
    println!("{}", render::warning(MISSING_KEY_WARNING));
    let key: String = Password::new()
        .with_prompt("Enter your Google AI Studio API key")
        .allow_empty_password(true)
        .interact()?;
    Ok(key)
}

/// Set the terminal title and print the header.
pub fn banner(logo: &Logo) {
    // Not every terminal supports titles; that is not worth failing over.
    let _ = execute!(std::io::stdout(), SetTitle(format!("{} {}", PAGE_ICON, PAGE_TITLE)));
    println!("{}   {}", logo.caption().dim(), HEADLINE.bold());
    println!();
    println!("{}", TAGLINE);
    println!();
}

/// Main form loop. Collects the three answers, then lets the user consult
/// the oracle or exit. Runs until "Exit" is chosen. Answers are kept between
/// rounds so a rejected form can be corrected instead of retyped.
pub fn main_form<M: TextModel + ?Sized>(model: &M, credential_present: bool) -> Result<()> {
    let styled = std::io::stdout().is_terminal();
    let mut seeker = Seeker::default();
    loop {
        seeker = read_seeker(&seeker)?;

        let items = vec!["Consult the Oracle", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        if selection != 0 {
            break;
        }

        handle_submission(model, seeker.clone(), credential_present, styled)?;
    }
    Ok(())
}

/// Ask the three questions, pre-filled with the previous answers. Empty
/// answers are allowed here and rejected on submit.
fn read_seeker(previous: &Seeker) -> Result<Seeker> {
    let name = ask_field("What is your name?", &previous.name)?;
    let occupation = ask_field(
        "What is your occupation or what do you study?",
        &previous.occupation,
    )?;
    let hobbies = ask_field("What are your hobbies or talents?", &previous.hobbies)?;
    Ok(Seeker {
        name,
        occupation,
        hobbies,
    })
}

fn ask_field(prompt: &str, previous: &str) -> Result<String> {
    let mut input = Input::<String>::new();
    input.with_prompt(prompt).allow_empty(true);
    if let Some(text) = initial_text(previous) {
        input.with_initial_text(text);
    }
    Ok(input.interact_text()?)
}

/// Text to pre-fill a field with. A blank previous answer leaves the field
/// empty.
fn initial_text(previous: &str) -> Option<&str> {
    if previous.trim().is_empty() {
        None
    } else {
        Some(previous)
    }
}

fn handle_submission<M: TextModel + ?Sized>(
    model: &M,
    seeker: Seeker,
    credential_present: bool,
    styled: bool,
) -> Result<()> {
    // The spinner only runs while a request is in flight.
    let spinner = if seeker.is_complete() && credential_present {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        pb.set_message(THINKING);
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    } else {
        None
    };

    let outcome = submit(model, seeker, credential_present);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    println!("{}", present(&outcome, styled));
    if outcome == Outcome::Rejected {
        return Ok(());
    }
    println!();
    println!("{}", render::footer());
    println!();
    Ok(())
}

/// Text shown for a finished submission.
pub fn present(outcome: &Outcome, styled: bool) -> String {
    match outcome {
        Outcome::Rejected => render::warning(MISSING_FIELDS),
        Outcome::Rendered(text) => render::render_markdown(text, styled),
        Outcome::ErrorRendered { cause, fallback } => format!(
            "{}\n\n{}",
            render::error(&render::spirits_unavailable(cause)),
            render::render_markdown(fallback, styled)
        ),
    }
}
