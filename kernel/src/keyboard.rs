use pc_keyboard::{
    layouts::Us104Key, DecodedKey, HandleControl, Keyboard as Decoder, KeyCode, ScancodeSet1,
};
use x86_64::instructions::port::Port;

const DATA_PORT: u16 = 0x60;
const STATUS_PORT: u16 = 0x64;
const STATUS_OUT_FULL: u8 = 0x01;
const KBD_ACK: u8 = 0xfa;
const KBD_RESEND: u8 = 0xfe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Enter,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Screen(usize),
}

pub struct Keyboard {
    decoder: Decoder<Us104Key, ScancodeSet1>,
    data: Port<u8>,
    status: Port<u8>,
}

impl Keyboard {
    pub fn new() -> Self {
        let mut kbd = Self {
            decoder: Decoder::new(ScancodeSet1::new(), Us104Key, HandleControl::Ignore),
            data: Port::new(DATA_PORT),
            status: Port::new(STATUS_PORT),
        };
        kbd.drain();
        kbd
    }

    /// Discards whatever the controller buffered before we started
    /// listening.
    fn drain(&mut self) {
        while unsafe { self.status.read() } & STATUS_OUT_FULL != 0 {
            let _ = unsafe { self.data.read() };
        }
    }

    fn read_scancode(&mut self) -> Option<u8> {
        let status = unsafe { self.status.read() };
        if status & STATUS_OUT_FULL == 0 {
            return None;
        }
        let sc = unsafe { self.data.read() };
        if sc == KBD_ACK || sc == KBD_RESEND {
            return None;
        }
        Some(sc)
    }

    /// Non-blocking: returns at most one classified key event per call.
    /// Key releases and keys outside the console's vocabulary decode to
    /// nothing.
    pub fn poll_event(&mut self) -> Option<KeyEvent> {
        let sc = self.read_scancode()?;
        let event = self.decoder.add_byte(sc).ok().flatten()?;
        let key = self.decoder.process_keyevent(event)?;
        map_key(key)
    }
}

fn map_key(key: DecodedKey) -> Option<KeyEvent> {
    match key {
        DecodedKey::Unicode(c) => match c {
            '\n' | '\r' => Some(KeyEvent::Enter),
            '\x08' => Some(KeyEvent::Backspace),
            ' '..='~' => Some(KeyEvent::Char(c)),
            _ => None,
        },
        DecodedKey::RawKey(code) => match code {
            KeyCode::F1 => Some(KeyEvent::Screen(0)),
            KeyCode::F2 => Some(KeyEvent::Screen(1)),
            KeyCode::F3 => Some(KeyEvent::Screen(2)),
            KeyCode::ArrowUp => Some(KeyEvent::Up),
            KeyCode::ArrowDown => Some(KeyEvent::Down),
            KeyCode::ArrowLeft => Some(KeyEvent::Left),
            KeyCode::ArrowRight => Some(KeyEvent::Right),
            KeyCode::PageUp => Some(KeyEvent::PageUp),
            KeyCode::PageDown => Some(KeyEvent::PageDown),
            KeyCode::Return => Some(KeyEvent::Enter),
            KeyCode::Backspace => Some(KeyEvent::Backspace),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_unicode_maps_to_char() {
        assert_eq!(map_key(DecodedKey::Unicode('a')), Some(KeyEvent::Char('a')));
        assert_eq!(map_key(DecodedKey::Unicode(' ')), Some(KeyEvent::Char(' ')));
    }

    #[test]
    fn control_unicode_maps_to_edit_events() {
        assert_eq!(map_key(DecodedKey::Unicode('\r')), Some(KeyEvent::Enter));
        assert_eq!(map_key(DecodedKey::Unicode('\n')), Some(KeyEvent::Enter));
        assert_eq!(map_key(DecodedKey::Unicode('\x08')), Some(KeyEvent::Backspace));
    }

    #[test]
    fn non_ascii_unicode_is_ignored() {
        assert_eq!(map_key(DecodedKey::Unicode('\u{e9}')), None);
        assert_eq!(map_key(DecodedKey::Unicode('\t')), None);
    }

    #[test]
    fn function_keys_select_screens() {
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::F1)), Some(KeyEvent::Screen(0)));
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::F2)), Some(KeyEvent::Screen(1)));
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::F3)), Some(KeyEvent::Screen(2)));
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::F4)), None);
    }

    #[test]
    fn navigation_keys_map_through() {
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::ArrowLeft)), Some(KeyEvent::Left));
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::PageUp)), Some(KeyEvent::PageUp));
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::PageDown)), Some(KeyEvent::PageDown));
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::Home)), None);
    }
}
