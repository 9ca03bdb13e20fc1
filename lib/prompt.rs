//! Interactive prompts for `stackgen generate`.
//!
//! Uses cliclack with a blue accent theme.

use std::sync::atomic::{AtomicBool, Ordering};

use cliclack::{Theme, ThemeState, input, intro, multiselect, outro, set_theme};
use console::{Style, Term};

use crate::compose::{CATALOG, CredentialInput, CredentialSource};
use crate::config::WizardConfig;
use crate::error::{StackError, StackResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

static CTRLC_HANDLER_SET: AtomicBool = AtomicBool::new(false);

/// Accent color in 256-color mode.
const ACCENT: u8 = 39;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Prompt theme with a blue accent.
pub struct StackTheme;

/// Credential source that asks the user, pre-filling values from the configuration.
pub struct PromptCredentials<'a> {
    config: &'a WizardConfig,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl<'a> PromptCredentials<'a> {
    /// Create a prompt-backed source using `config` for defaults.
    pub fn new(config: &'a WizardConfig) -> Self {
        Self { config }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Theme for StackTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().color256(ACCENT),
            ThemeState::Error(_) => Style::new().red(),
            _ => Style::new().dim(),
        }
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active | ThemeState::Submit => Style::new().color256(ACCENT),
            ThemeState::Error(_) => Style::new().red(),
            _ => Style::new().dim(),
        }
    }

    fn input_style(&self, _state: &ThemeState) -> Style {
        Style::new()
    }

    fn placeholder_style(&self, _state: &ThemeState) -> Style {
        Style::new().dim()
    }
}

impl CredentialSource for PromptCredentials<'_> {
    fn credentials(&mut self, service: &str) -> StackResult<CredentialInput> {
        let mut username_prompt = input(format!("Username for {}", service)).required(false);
        if let Some(default) = self.config.username(service) {
            username_prompt = username_prompt.placeholder(default).default_input(default);
        }
        let username: String = map_cancelled(username_prompt.interact())?;

        let password: String = match self.config.password(service) {
            Some(configured) => {
                map_cancelled(cliclack::log::remark(format!(
                    "Using configured password for {}",
                    service
                )))?;
                configured.to_string()
            }
            None => map_cancelled(
                cliclack::password(format!("Password for {}", service))
                    .mask('▪')
                    .interact(),
            )?,
        };

        let default_port = self.config.port(service);
        let port: String = map_cancelled(
            input(format!("Host port for {}", service))
                .placeholder(&default_port)
                .default_input(&default_port)
                .validate(|input: &String| {
                    if input.trim().is_empty() {
                        Err("Port is required")
                    } else {
                        Ok(())
                    }
                })
                .interact(),
        )?;

        tracing::debug!(service, username = %username, port = %port, "Collected credentials");

        Ok(CredentialInput::new(service, username, password, port.trim()))
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Initialize the theme for cliclack prompts and set up Ctrl+C handler.
pub fn init_theme() {
    set_theme(StackTheme);

    // Restore the cursor on Ctrl+C (registered once)
    if !CTRLC_HANDLER_SET.swap(true, Ordering::SeqCst) {
        let _ = ctrlc::set_handler(|| {
            let term = Term::stderr();
            let _ = term.show_cursor();
            std::process::exit(130);
        });
    }
}

/// Check if an error indicates the user cancelled (ESC or Ctrl+C).
fn is_cancelled(e: &std::io::Error) -> bool {
    e.kind() == std::io::ErrorKind::Interrupted
}

/// Convert IO interrupted errors to Cancelled for clean exit on ESC.
pub fn map_cancelled<T>(result: Result<T, std::io::Error>) -> StackResult<T> {
    result.map_err(|e| {
        if is_cancelled(&e) {
            StackError::Cancelled
        } else {
            StackError::Io(e)
        }
    })
}

/// Open the wizard.
pub fn begin_wizard() -> StackResult<()> {
    init_theme();
    map_cancelled(intro("stackgen"))
}

/// Close the wizard with a summary line.
pub fn finish_wizard(service_count: usize) -> StackResult<()> {
    let message = match service_count {
        0 => "No services selected".to_string(),
        1 => "1 service configured".to_string(),
        n => format!("{} services configured", n),
    };
    map_cancelled(outro(message))
}

/// Ask which catalog services to include.
///
/// Services listed in `preselected` start checked. An empty selection is allowed.
pub fn prompt_services(preselected: &[String]) -> StackResult<Vec<String>> {
    let mut prompt = multiselect("Select services to include").required(false);
    for template in CATALOG {
        prompt = prompt.item(template.id, template.id, template.description);
    }

    let initial: Vec<&'static str> = CATALOG
        .iter()
        .map(|t| t.id)
        .filter(|id| preselected.iter().any(|p| p.as_str() == *id))
        .collect();
    if !initial.is_empty() {
        prompt = prompt.initial_values(initial);
    }

    let selected: Vec<&'static str> = map_cancelled(prompt.interact())?;
    Ok(selected.into_iter().map(str::to_string).collect())
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
