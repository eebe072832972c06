use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether we are currently prompting the user for confirmation.
static CONFIRMATION_PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

/// RAII helper that marks the confirmation prompt as active while it is in scope.
pub struct ConfirmationPromptGuard;

impl ConfirmationPromptGuard {
    pub fn activate() -> Self {
        CONFIRMATION_PROMPT_ACTIVE.store(true, Ordering::SeqCst);
        Self
    }
}

impl Drop for ConfirmationPromptGuard {
    fn drop(&mut self) {
        CONFIRMATION_PROMPT_ACTIVE.store(false, Ordering::SeqCst);
    }
}

/// Returns true when the confirmation prompt is currently waiting for input.
pub fn confirmation_prompt_active() -> bool {
    CONFIRMATION_PROMPT_ACTIVE.load(Ordering::SeqCst)
}

/// Ask `Apply? [y/N]` on stdout and read the answer from stdin.
pub fn get_user_confirmation() -> Result<bool> {
    let _guard = ConfirmationPromptGuard::activate();
    let stdin = io::stdin();
    confirm_with_input(&mut stdin.lock(), &mut io::stdout())
}

pub fn confirm_with_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool> {
    write!(writer, "Apply? [y/N]: ")?;
    writer.flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();

    Ok(input == "y" || input == "yes")
}
