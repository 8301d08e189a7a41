//! Line-oriented terminal I/O.

use crate::interrupt::Interrupt;
use std::io::{self, BufRead, Read, Stdout, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use tracing::debug;

/// How often a blocked read looks at the interrupt flag.
const POLL: Duration = Duration::from_millis(50);

/// Reads lines from `R` and writes text to `W`, flushing after each write.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<InterruptibleLines, Stdout> {
    /// Console over the process's stdin and stdout.
    ///
    /// Input reads as exhausted once `interrupt` is raised.
    pub fn stdio(interrupt: Interrupt) -> Self {
        Self::new(InterruptibleLines::stdin(interrupt), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `s` as is.
    pub fn write(&mut self, s: &str) -> io::Result<()> {
        self.output.write_all(s.as_bytes())?;
        self.output.flush()
    }

    /// Writes `s` followed by a newline.
    pub fn writeln(&mut self, s: &str) -> io::Result<()> {
        self.write(s)?;
        self.write("\n")
    }

    /// Shows `prompt` and reads one line.
    ///
    /// Returns `None` once input is exhausted.
    pub fn getln(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Line reader fed by another thread that reports end of input when
/// interrupted, even while a read is blocked.
#[derive(Debug)]
pub struct InterruptibleLines {
    lines: Receiver<io::Result<Vec<u8>>>,
    interrupt: Interrupt,
    buf: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl InterruptibleLines {
    /// Reads from `lines`; an empty line or a dropped sender ends input.
    pub fn new(lines: Receiver<io::Result<Vec<u8>>>, interrupt: Interrupt) -> Self {
        Self {
            lines,
            interrupt,
            buf: Vec::new(),
            pos: 0,
            closed: false,
        }
    }

    /// Reads the process's stdin on a background thread.
    pub fn stdin(interrupt: Interrupt) -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let mut stdin = io::stdin().lock();
            loop {
                let mut line = Vec::new();
                let read = stdin.read_until(b'\n', &mut line);
                let done = !matches!(read, Ok(n) if n > 0);
                if tx.send(read.map(|_| line)).is_err() || done {
                    debug!("stdin reader finished");
                    break;
                }
            }
        });
        Self::new(rx, interrupt)
    }
}

impl Read for InterruptibleLines {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for InterruptibleLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.pos >= self.buf.len() {
            if self.closed || self.interrupt.is_raised() {
                return Ok(&[]);
            }
            match self.lines.recv_timeout(POLL) {
                Ok(line) => {
                    self.buf = line?;
                    self.pos = 0;
                    self.closed = self.buf.is_empty();
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.closed = true,
            }
        }
        Ok(&self.buf[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.buf.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getln_until_end_of_input() {
        let mut out = Vec::new();
        let mut console = Console::new("1 1\n2 2\n".as_bytes(), &mut out);

        assert_eq!(console.getln("> ").unwrap().as_deref(), Some("1 1\n"));
        assert_eq!(console.getln("> ").unwrap().as_deref(), Some("2 2\n"));
        assert_eq!(console.getln("> ").unwrap(), None);
        drop(console);

        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn test_writeln() {
        let mut out = Vec::new();
        let mut console = Console::new(io::empty(), &mut out);
        console.writeln("hello").unwrap();
        console.write("x").unwrap();
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nx");
    }

    #[test]
    fn test_interruptible_lines() {
        let (tx, rx) = mpsc::channel();
        let interrupt = Interrupt::new();
        let mut console = Console::new(InterruptibleLines::new(rx, interrupt.clone()), io::sink());

        tx.send(Ok(b"1 1\n".to_vec())).unwrap();
        assert_eq!(console.getln("> ").unwrap().as_deref(), Some("1 1\n"));

        // nothing more is sent; the raised flag ends the blocked read
        interrupt.raise();
        assert_eq!(console.getln("> ").unwrap(), None);
        drop(tx);
    }

    #[test]
    fn test_interruptible_lines_end_of_input() {
        let (tx, rx) = mpsc::channel();
        let mut console = Console::new(InterruptibleLines::new(rx, Interrupt::new()), io::sink());

        tx.send(Ok(b"y".to_vec())).unwrap();
        tx.send(Ok(Vec::new())).unwrap();
        assert_eq!(console.getln("> ").unwrap().as_deref(), Some("y"));
        assert_eq!(console.getln("> ").unwrap(), None);
    }
}
