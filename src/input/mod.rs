//! Input module - keyboard byte stream decoding.
//!
//! The terminal delivers keys as raw bytes once the renderer has put it in
//! raw mode: arrow keys arrive as `ESC [ A..D` sequences, everything else as
//! single bytes. Decoding is a pure function over a non-blocking byte source
//! so it can be tested against injected byte slices; the live source polls
//! stdin with a zero timeout and reads one byte at a time.
//!
//! One poll decodes at most one key (one escape sequence or one simple
//! byte). Incomplete escape sequences are resolved from whatever bytes are
//! available right now and never buffered across polls: a lone ESC is
//! indistinguishable from the escape key and is reported as such.

use arrayvec::ArrayVec;

use crate::types::{Direction, InputEvent};

/// Largest number of events one key can produce (`q`/Ctrl-C emit two).
pub const MAX_EVENTS_PER_POLL: usize = 2;

pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_POLL>;

/// A non-blocking source of keyboard bytes.
pub trait ByteSource {
    /// The next pending byte, or `None` when nothing is buffered.
    fn next_byte(&mut self) -> Option<u8>;
}

/// Decode at most one key from the source.
///
/// Priority order: escape sequences, space, WASD, quit keys. Unrecognized
/// bytes are dropped. An `ESC [` with no final byte decodes to nothing,
/// matching the reference.
pub fn decode_key(source: &mut impl ByteSource) -> EventBatch {
    let mut events = EventBatch::new();

    let Some(byte) = source.next_byte() else {
        return events;
    };

    match byte {
        0x1b => match source.next_byte() {
            Some(b'[') => {
                let direction = match source.next_byte() {
                    Some(b'A') => Some(Direction::Up),
                    Some(b'B') => Some(Direction::Down),
                    Some(b'C') => Some(Direction::Right),
                    Some(b'D') => Some(Direction::Left),
                    _ => None,
                };
                if let Some(direction) = direction {
                    events.push(InputEvent::Turn(direction));
                }
            }
            // ESC followed by anything else, or by nothing, reads as the
            // escape key.
            _ => events.push(InputEvent::Escape),
        },
        b' ' => events.push(InputEvent::Space),
        b'w' | b'W' => events.push(InputEvent::Turn(Direction::Up)),
        b's' | b'S' => events.push(InputEvent::Turn(Direction::Down)),
        b'a' | b'A' => events.push(InputEvent::Turn(Direction::Left)),
        b'd' | b'D' => events.push(InputEvent::Turn(Direction::Right)),
        b'q' | 0x03 => {
            events.push(InputEvent::Quit);
            events.push(InputEvent::Escape);
        }
        _ => {}
    }

    events
}

/// Non-blocking stdin byte reader.
///
/// `poll(2)` with a zero timeout, then a single-byte `read(2)`. Works only
/// while the renderer holds the terminal in raw mode; on a non-tty stdin it
/// simply reports no bytes, which degrades the game to headless-but-running
/// rather than crashing.
pub struct RawStdin;

impl RawStdin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RawStdin {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for RawStdin {
    fn next_byte(&mut self) -> Option<u8> {
        let mut fd = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };

        // SAFETY: `fd` is a valid pollfd and the timeout is zero, so this
        // never blocks.
        let ready = unsafe { libc::poll(&mut fd, 1, 0) };
        if ready <= 0 || fd.revents & libc::POLLIN == 0 {
            return None;
        }

        let mut byte: u8 = 0;
        // SAFETY: reading one byte into a valid one-byte buffer.
        let n = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                &mut byte as *mut u8 as *mut libc::c_void,
                1,
            )
        };
        (n == 1).then_some(byte)
    }
}

/// The live input source owned by the game session.
pub struct InputSource {
    stdin: RawStdin,
}

impl InputSource {
    pub fn new() -> Self {
        Self {
            stdin: RawStdin::new(),
        }
    }

    /// Decode at most one pending key; empty when no input is buffered.
    pub fn poll(&mut self) -> EventBatch {
        decode_key(&mut self.stdin)
    }
}

impl Default for InputSource {
    fn default() -> Self {
        Self::new()
    }
}
