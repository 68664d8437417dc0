use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use postbox_config::Config;
use postbox_core_contact_form_contracts::{ContactFormFeatureService, ContactFormSubmitError};
use postbox_models::contact_form::{ContactFormEvent, ContactFormState};
use tracing::info;

use crate::environment;

#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// File with one JSON event per line (reads stdin if omitted or `-`)
    path: Option<PathBuf>,
    /// Print the rendered form after every event instead of only at the end
    #[arg(short, long)]
    each: bool,
}

impl ReplayCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let contact_form = environment::contact_form_feature(config)?;
        let stdout = std::io::stdout();

        match self.path.filter(|path| path.as_os_str() != "-") {
            Some(path) => {
                let file = File::open(&path)
                    .with_context(|| format!("Failed to open event file {}", path.display()))?;
                replay(&contact_form, BufReader::new(file), stdout.lock(), self.each)?;
            }
            None => {
                replay(&contact_form, std::io::stdin().lock(), stdout.lock(), self.each)?;
            }
        }

        Ok(())
    }
}

/// Apply the events read from `input` to a new form, writing the rendered
/// form to `output`.
pub fn replay(
    contact_form: &impl ContactFormFeatureService,
    input: impl BufRead,
    mut output: impl Write,
    each: bool,
) -> anyhow::Result<ContactFormState> {
    let mut state = ContactFormState::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.context("Failed to read events")?;
        if line.trim().is_empty() {
            continue;
        }

        let event = serde_json::from_str::<ContactFormEvent>(&line)
            .with_context(|| format!("Invalid event on line {line_number}"))?;

        match event {
            ContactFormEvent::Change { field, value } => {
                contact_form.change_field(&mut state, field, value);
            }
            ContactFormEvent::Submit => match contact_form.submit(&mut state) {
                Ok(_) => info!(line = line_number, "Contact form submitted"),
                Err(ContactFormSubmitError::Invalid(errors)) => info!(
                    line = line_number,
                    invalid_fields = errors.len(),
                    "Contact form submission blocked"
                ),
            },
        }

        if each {
            writeln!(output, "{}", contact_form.render(&state)?)?;
        }
    }

    if !each {
        writeln!(output, "{}", contact_form.render(&state)?)?;
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use postbox_models::contact_form::ContactFormField;
    use pretty_assertions::assert_eq;

    use super::*;

    fn contact_form() -> environment::ContactFormFeature {
        let config = postbox_config::load_paths(&[] as &[&str]).unwrap();
        environment::contact_form_feature(&config).unwrap()
    }

    #[test]
    fn replay_events() {
        // Arrange
        let input = [
            r#"{"type":"change","field":"firstName","value":"Cynthia"}"#,
            r#"{"type":"change","field":"lastName","value":"Coronado"}"#,
            "",
            r#"{"type":"change","field":"email","value":"cynthia.softball12@gmail.com"}"#,
            r#"{"type":"submit"}"#,
        ]
        .join("\n");
        let mut output = Vec::new();

        // Act
        let result = replay(&contact_form(), input.as_bytes(), &mut output, false);

        // Assert
        let state = result.unwrap();
        assert!(state.errors.is_empty());
        assert!(state.submission.is_some());

        let html = String::from_utf8(output).unwrap();
        assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
        assert!(html.contains(r#"<p data-testid="firstnameDisplay">Cynthia</p>"#));
    }

    #[test]
    fn replay_each() {
        // Arrange
        let input = [
            r#"{"type":"change","field":"email","value":"cynthia.softball12@"}"#,
            r#"{"type":"submit"}"#,
        ]
        .join("\n");
        let mut output = Vec::new();

        // Act
        let result = replay(&contact_form(), input.as_bytes(), &mut output, true);

        // Assert
        let state = result.unwrap();
        assert_eq!(state.errors.len(), 3);
        assert_eq!(state.submission, None);
        assert_eq!(state.values.get(ContactFormField::Email), "cynthia.softball12@");

        let html = String::from_utf8(output).unwrap();
        assert_eq!(html.matches("<!DOCTYPE html>").count(), 2);
    }

    #[test]
    fn invalid_event() {
        let input = "{\"type\":\"submit\"}\n{\"type\":\"click\"}\n";

        let result = replay(&contact_form(), input.as_bytes(), std::io::sink(), false);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Invalid event on line 2");
    }
}
