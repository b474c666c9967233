use std::io::{self, BufRead, Write};

use dt_core::form::options::OptionSet;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the form was submitted")]
    Closed,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Reads one line without its trailing newline.
    fn read_line(&mut self) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Free text prompt. An empty line is returned as an empty string.
    pub fn prompt_text(&mut self, placeholder: &str) -> Result<String, PromptError> {
        write!(self.output, "  ({placeholder}) > ")?;
        self.read_line()
    }

    /// Numbered option picker.
    ///
    /// Returns `None` when the user leaves the selection empty. Numbers out
    /// of range are asked again.
    pub fn prompt_select(
        &mut self,
        placeholder: &str,
        options: &OptionSet,
    ) -> Result<Option<&'static str>, PromptError> {
        for (index, option) in options.options().iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, option.label)?;
        }

        loop {
            write!(self.output, "  ({placeholder}) > ")?;
            let answer = self.read_line()?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }

            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| options.get(index));
            match picked {
                Some(option) => return Ok(Some(option.value)),
                None => writeln!(self.output, "  Opção inválida: {answer}")?,
            }
        }
    }
}
