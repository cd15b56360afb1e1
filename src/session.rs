//! Interactive terminal session.
//!
//! Turns input lines into controller events and renders a [`Screen`] after each
//! state change. One line of input is one field edit; end of input ends the
//! session cleanly at any prompt.

use crate::controller::{FormState, SubmissionController, SubmitAttempt};
use crate::domain::Field;
use crate::view::Screen;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// A form session over any line-oriented input and text output.
pub struct FormSession<R, W> {
    input: R,
    output: W,
}

impl<R, W> FormSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was rendered.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run forms until the user declines another one or input ends.
    ///
    /// Returns the last controller so callers can inspect where it stopped.
    pub async fn run(&mut self, mut controller: SubmissionController) -> io::Result<SubmissionController> {
        loop {
            self.render(&controller).await?;
            if !self.fill(&mut controller, &Field::ALL).await? {
                return Ok(controller);
            }

            if !self.submit_until_sent(&mut controller).await? {
                return Ok(controller);
            }

            self.render(&controller).await?;
            match self.prompt("Submit another form? [y/N] ").await? {
                Some(answer) if is_yes(&answer) => controller = controller.restart(),
                _ => return Ok(controller),
            }
        }
    }

    /// Submit, re-prompting invalid fields and offering resubmission after a
    /// failed dispatch. Returns `false` if input ended first.
    async fn submit_until_sent(&mut self, controller: &mut SubmissionController) -> io::Result<bool> {
        loop {
            match controller.begin_submit() {
                SubmitAttempt::Ready(submission) => {
                    self.render(controller).await?;
                    // Failure is reflected in the controller state and notice
                    let _ = controller.dispatch(submission).await;
                }
                SubmitAttempt::Invalid(errors) => {
                    self.render(controller).await?;
                    let invalid: Vec<Field> = errors.fields().collect();
                    if !self.fill(controller, &invalid).await? {
                        return Ok(false);
                    }
                    continue;
                }
                SubmitAttempt::Busy(state) => {
                    tracing::debug!(%state, "Submit ignored by session");
                }
            }

            match controller.state() {
                FormState::Submitted => return Ok(true),
                FormState::Idle => {
                    self.render(controller).await?;
                    if !self.offer_resubmit(controller).await? {
                        return Ok(false);
                    }
                }
                FormState::Loading => return Ok(false),
            }
        }
    }

    /// After a failed dispatch: let the user edit fields, then resubmit on an
    /// empty line. Returns `false` if input ended.
    async fn offer_resubmit(&mut self, controller: &mut SubmissionController) -> io::Result<bool> {
        loop {
            let line = match self
                .prompt("Press Enter to resubmit, or type a field name to edit it: ")
                .await?
            {
                Some(line) => line,
                None => return Ok(false),
            };

            if line.trim().is_empty() {
                return Ok(true);
            }

            match line.parse::<Field>() {
                Ok(field) => {
                    if !self.fill(controller, &[field]).await? {
                        return Ok(false);
                    }
                }
                Err(message) => self.write(&format!("{}\n", message)).await?,
            }
        }
    }

    /// Prompt for each field in turn, showing its error right after entry.
    /// Returns `false` if input ended.
    async fn fill(&mut self, controller: &mut SubmissionController, fields: &[Field]) -> io::Result<bool> {
        for &field in fields {
            let label = if field.is_required() {
                format!("{} *: ", field.label())
            } else {
                format!("{}: ", field.label())
            };

            let Some(value) = self.prompt(&label).await? else {
                return Ok(false);
            };

            controller.set_field(field, value);
            if let Some(error) = controller.error_for(field) {
                self.write(&format!("  ! {}\n", error)).await?;
            }
        }
        Ok(true)
    }

    async fn render(&mut self, controller: &SubmissionController) -> io::Result<()> {
        let screen = Screen::from_controller(controller);
        self.write(&format!("\n{}", screen)).await
    }

    /// Write a prompt and read one line without its terminator.
    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write(text).await?;

        // Invalid UTF-8 is replaced, not fatal
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
