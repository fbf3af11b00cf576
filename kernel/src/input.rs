use crate::console::Console;
use crate::keyboard::KeyEvent;
use crate::vga::TextSurface;

/// Routes a classified key event to the edit engine, the viewport, or the
/// screen switcher. Refusals happen inside the console operations and
/// leave the display untouched.
pub fn dispatch<S: TextSurface>(console: &mut Console<S>, event: KeyEvent) {
    match event {
        KeyEvent::Char(c) => console.put_char(c),
        KeyEvent::Enter => console.newline(),
        KeyEvent::Backspace => console.backspace(),
        KeyEvent::Left => console.cursor_left(),
        KeyEvent::Right => console.cursor_right(),
        KeyEvent::Up => console.cursor_up(),
        KeyEvent::Down => console.cursor_down(),
        KeyEvent::PageUp => console.page_up(),
        KeyEvent::PageDown => console.page_down(),
        KeyEvent::Screen(index) => console.switch_to(index),
    }
}
