use std::io::{self, BufRead, Write};

/// Line-oriented terminal: prompts on `output`, answers from `input`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints `prompt` and blocks for one line. `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line reads
    /// as an unrecognised answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
