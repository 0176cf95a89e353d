//! Operator prompts on a terminal.

use std::io::{BufRead, Write};
use std::sync::{Mutex, PoisonError};

use autodiag_core::errors::{DiagResult, SessionError};
use autodiag_core::traits::IHumanInput;

/// Asks the operator for manual verdicts; invalid answers are asked again.
pub struct PromptInput<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R: BufRead, W: Write> PromptInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Ask `question` until one of `choices` is answered.
    pub fn ask(&self, question: &str, choices: &[&str]) -> DiagResult<String> {
        let mut input = self.input.lock().unwrap_or_else(PoisonError::into_inner);
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let closed = || SessionError::InputClosed {
            prompt: question.to_string(),
        };
        loop {
            write!(output, "\n{question} ").map_err(|_| closed())?;
            output.flush().map_err(|_| closed())?;
            let mut line = String::new();
            if input.read_line(&mut line).map_err(|_| closed())? == 0 {
                return Err(closed().into());
            }
            let answer = line.trim();
            if choices.contains(&answer) {
                return Ok(answer.to_string());
            }
        }
    }
}

impl<R: BufRead + Send, W: Write + Send> IHumanInput for PromptInput<R, W> {
    fn manual_verdict(&self, component: &str) -> DiagResult<bool> {
        let question = format!(
            "manual inspection of {component}: press '0' for defective component, i.e., anomaly, and '1' for no defect.."
        );
        Ok(self.ask(&question, &["0", "1"])? == "0")
    }
}
