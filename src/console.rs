//! Operator-facing response channel.
//!
//! Every progress line and adjustment report goes through [`Console`]. Lines
//! are formatted into fixed-capacity buffers so the crate works without an
//! allocator.

use core::fmt::{self, Write};

/// Capacity of a single response line in bytes.
pub const MESSAGE_CAPACITY: usize = 128;

/// One formatted response line.
pub type Message = heapless::String<MESSAGE_CAPACITY>;

/// Sink for human-readable progress and result text.
pub trait Console {
    /// Deliver one line of informational text to the operator.
    fn respond_info(&mut self, msg: &str);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn respond_info(&mut self, msg: &str) {
        (**self).respond_info(msg)
    }
}

/// Console that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConsole;

impl Console for NullConsole {
    fn respond_info(&mut self, _msg: &str) {}
}

#[cfg(any(feature = "std", feature = "alloc"))]
impl Console for alloc::vec::Vec<alloc::string::String> {
    fn respond_info(&mut self, msg: &str) {
        self.push(msg.into());
    }
}

/// Writer that keeps as much text as fits and silently drops the rest.
struct Truncating<'a, const N: usize>(&'a mut heapless::String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format `args` into a fixed-capacity string, truncating on overflow.
pub fn format_truncated<const N: usize>(args: fmt::Arguments<'_>) -> heapless::String<N> {
    let mut buf = heapless::String::new();
    let _ = Truncating(&mut buf).write_fmt(args);
    buf
}

/// Send one formatted line to a [`Console`].
pub fn respond(console: &mut impl Console, args: fmt::Arguments<'_>) {
    let msg: Message = format_truncated(args);
    console.respond_info(msg.as_str());
}

/// Send a line made of `width` repetitions of `fill`.
pub fn respond_rule(console: &mut impl Console, fill: char, width: usize) {
    let mut msg = Message::new();
    for _ in 0..width.min(MESSAGE_CAPACITY) {
        let _ = msg.push(fill);
    }
    console.respond_info(msg.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_truncated_fits() {
        let s: heapless::String<16> = format_truncated(format_args!("Z={:.4}", 1.23456));
        assert_eq!(s.as_str(), "Z=1.2346");
    }

    #[test]
    fn test_format_truncated_overflow() {
        let s: heapless::String<8> = format_truncated(format_args!("{}", "abcdefghijkl"));
        assert_eq!(s.as_str(), "abcdefgh");
    }

    #[test]
    fn test_respond_rule() {
        let mut out: Vec<String> = Vec::new();
        respond_rule(&mut out, '=', 50);
        assert_eq!(out[0].len(), 50);
        assert!(out[0].chars().all(|c| c == '='));
    }
}
