//! Console output with a scoped foreground color.
//!
//! `colored` styles individual strings; here the color is console state that
//! a [`ForegroundGuard`] sets and then restores when it goes out of scope.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use colored::Color;

const RESET: &str = "\x1b[0m";

pub struct Console<W: Write> {
    out: W,
    colorize: bool,
    foreground: Option<Color>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Self {
            out,
            colorize,
            foreground: None,
        }
    }

    /// `None` is the terminal default.
    pub fn foreground_color(&self) -> Option<Color> {
        self.foreground
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Switches to `color` until the returned guard is dropped.
    pub fn foreground(&mut self, color: Color) -> io::Result<ForegroundGuard<'_, W>> {
        let previous = self.foreground;
        self.apply(Some(color))?;
        Ok(ForegroundGuard {
            console: self,
            previous,
            restored: false,
        })
    }

    fn apply(&mut self, color: Option<Color>) -> io::Result<()> {
        self.foreground = color;
        if !self.colorize {
            return Ok(());
        }
        match color {
            Some(color) => write!(self.out, "\x1b[{}m", color.to_fg_str()),
            None => self.out.write_all(RESET.as_bytes()),
        }
    }
}

impl<W: Write> Write for Console<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

pub struct ForegroundGuard<'a, W: Write> {
    console: &'a mut Console<W>,
    previous: Option<Color>,
    restored: bool,
}

impl<W: Write> ForegroundGuard<'_, W> {
    /// Restores the previous color now, reporting a failed write.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        self.console.apply(self.previous)
    }
}

impl<W: Write> Deref for ForegroundGuard<'_, W> {
    type Target = Console<W>;

    fn deref(&self) -> &Console<W> {
        self.console
    }
}

impl<W: Write> DerefMut for ForegroundGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Console<W> {
        self.console
    }
}

impl<W: Write> Drop for ForegroundGuard<'_, W> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Early-return path; nowhere to report a failed restore from drop
        let _ = self.console.apply(self.previous);
    }
}

/// Writes a blank line and `message` in `color`, then restores the previous color.
pub fn write_header_line<W: Write>(console: &mut Console<W>, color: Color, message: &str) -> io::Result<()> {
    let mut guard = console.foreground(color)?;
    writeln!(guard, "\n{}", message)?;
    guard.restore()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_header_line_plain() {
        let mut console = Console::new(Vec::new(), false);
        write_header_line(&mut console, Color::Yellow, "Constant pattern").unwrap();
        assert_eq!(output(console), "\nConstant pattern\n");
    }

    #[test]
    fn test_header_line_colored_and_reset() {
        let mut console = Console::new(Vec::new(), true);
        write_header_line(&mut console, Color::Yellow, "Type pattern").unwrap();
        assert_eq!(console.foreground_color(), None);
        assert_eq!(output(console), "\x1b[33m\nType pattern\n\x1b[0m");
    }

    #[test]
    fn test_nested_guards_restore_previous_color() {
        let mut console = Console::new(Vec::new(), true);
        {
            let mut outer = console.foreground(Color::Green).unwrap();
            {
                let mut inner = outer.foreground(Color::Red).unwrap();
                assert_eq!(inner.foreground_color(), Some(Color::Red));
                write!(inner, "red").unwrap();
            }
            assert_eq!(outer.foreground_color(), Some(Color::Green));
            write!(outer, "green").unwrap();
        }
        assert_eq!(console.foreground_color(), None);
        assert_eq!(output(console), "\x1b[32m\x1b[31mred\x1b[32mgreen\x1b[0m");
    }

    #[test]
    fn test_color_restored_on_early_return() {
        fn bail<W: Write>(console: &mut Console<W>) -> io::Result<()> {
            let _guard = console.foreground(Color::Blue)?;
            Err(io::Error::other("early"))
        }

        let mut console = Console::new(Vec::new(), true);
        assert!(bail(&mut console).is_err());
        assert_eq!(console.foreground_color(), None);
        assert!(output(console).ends_with(RESET));
    }

    /// Accepts everything except the reset sequence.
    struct RejectReset(Vec<u8>);

    impl Write for RejectReset {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf == RESET.as_bytes() {
                return Err(io::Error::other("reset rejected"));
            }
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_restore_is_reported() {
        let mut console = Console::new(RejectReset(Vec::new()), true);
        let result = write_header_line(&mut console, Color::Yellow, "hdr");

        assert!(result.is_err());
        assert_eq!(console.foreground_color(), None);
        assert_eq!(console.into_inner().0, b"\x1b[33m\nhdr\n");
    }

    #[test]
    fn test_explicit_restore_does_not_reset_twice() {
        let mut console = Console::new(Vec::new(), true);
        let guard = console.foreground(Color::Magenta).unwrap();
        guard.restore().unwrap();

        assert_eq!(console.foreground_color(), None);
        assert_eq!(output(console), "\x1b[35m\x1b[0m");
    }
}
