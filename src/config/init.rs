use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{get_profile_path, Profile};
use crate::input::{validate_input, InputRecord, RawInput, RawValue};

/// Prompt text and suggested default for each input field, in field order.
const QUESTIONS: [(&str, &str, &str); 7] = [
    ("current_score", "Current credit score (300-850)", "680"),
    ("utilization_percent", "Card utilization %", "30"),
    ("on_time_payments_percent", "On-time payments %", "98"),
    ("age_oldest_account_years", "Age of oldest account (years)", "5"),
    ("hard_inquiries_last_12mo", "Hard inquiries in the last 12 months", "1"),
    ("new_accounts_last_12mo", "New accounts in the last 12 months", "0"),
    ("derogatory_marks", "Derogatory marks", "0"),
];

/// Interactive prompts over any reader/writer pair.
struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{}", message).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before the profile was complete");
        }
        Ok(input.trim().to_string())
    }

    /// Prompt with a default value. Returns default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt with a yes/no question. Returns bool based on input and default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).context("Failed to write output")
    }
}

/// Run the interactive profile wizard on stdin/stdout.
///
/// If `path` is None, the profile is written to the default location.
pub fn run_init_wizard(path: Option<PathBuf>) -> Result<PathBuf> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let profile_path = match path {
        Some(p) => p,
        None => get_profile_path()?,
    };
    run_wizard(stdin.lock(), stdout.lock(), &profile_path)?;
    Ok(profile_path)
}

/// Wizard body, generic over input/output. Returns the profile it wrote, or
/// None if the user declined to overwrite an existing file.
fn run_wizard<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    profile_path: &Path,
) -> Result<Option<Profile>> {
    let mut p = Prompter { reader, writer };

    p.say("Credit Score Simulator profile")?;
    p.say("Press Enter to accept the suggested value.")?;

    if profile_path.exists() {
        let overwrite = p.prompt_yes_no(
            &format!(
                "Profile already exists at {}. Overwrite?",
                profile_path.display()
            ),
            false,
        )?;
        if !overwrite {
            p.say("Keeping the existing profile.")?;
            return Ok(None);
        }
    }

    let name = p.prompt_with_default("Profile name", "baseline")?;

    let mut snapshot = RawInput::default();
    for (field, _, _) in QUESTIONS {
        ask_field(&mut p, &mut snapshot, field)?;
    }

    // Re-ask whatever fails coercion or range checks until the snapshot is usable
    loop {
        let input = match InputRecord::try_from(snapshot.clone()) {
            Ok(input) => input,
            Err(e) => {
                p.say(&format!("  {}", e))?;
                ask_field(&mut p, &mut snapshot, e.field())?;
                continue;
            }
        };

        match validate_input(&input) {
            Ok(()) => break,
            Err(errors) => {
                for error in &errors {
                    p.say(&format!("  {}", error))?;
                }
                for error in &errors {
                    let field = error.split(':').next().unwrap_or_default();
                    ask_field(&mut p, &mut snapshot, field)?;
                }
            }
        }
    }

    let profile = Profile {
        name: Some(name),
        snapshot,
    };

    let yaml = serde_saphyr::to_string(&profile).context("Failed to serialize profile")?;
    if let Some(parent) = profile_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(profile_path, &yaml)
        .with_context(|| format!("Failed to write profile to {}", profile_path.display()))?;

    p.say(&format!("Profile written to {}", profile_path.display()))?;
    Ok(Some(profile))
}

fn ask_field<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    snapshot: &mut RawInput,
    field: &str,
) -> Result<()> {
    let Some((_, question, default)) = QUESTIONS.iter().find(|(name, _, _)| *name == field) else {
        bail!("Unknown profile field '{}'", field);
    };
    let answer = p.prompt_with_default(question, default)?;
    let value = match answer.parse::<f64>() {
        Ok(n) if n.is_finite() => RawValue::Number(n),
        _ => RawValue::Text(answer),
    };
    if let Some(slot) = snapshot.field_mut(field) {
        *slot = Some(value);
    }
    Ok(())
}
