use core::fmt;

use spin::Mutex;

use crate::screen::Screen;
use crate::vga::{Cell, Color, ColorCode, TextSurface, VgaText, HEIGHT, WIDTH};

pub const SCREEN_COUNT: usize = 3;

const HEARTBEAT_COLOR: ColorCode = ColorCode::new(Color::LightRed, Color::Black);

/// Owner of the per-screen state and the display surface. Every mutating
/// operation ends in a render; refused operations return without one.
pub struct Console<S> {
    screens: [Screen; SCREEN_COUNT],
    active: usize,
    surface: S,
}

impl<S> Console<S> {
    pub const fn new(surface: S) -> Self {
        Self {
            screens: [
                Screen::new(ColorCode::new(Color::LightGray, Color::Black)),
                Screen::new(ColorCode::new(Color::LightGreen, Color::Black)),
                Screen::new(ColorCode::new(Color::LightCyan, Color::Black)),
            ],
            active: 0,
            surface,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_screen(&self) -> &Screen {
        &self.screens[self.active]
    }

    pub fn screen(&self, index: usize) -> &Screen {
        &self.screens[index]
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: TextSurface> Console<S> {
    /// Copies the visible window of the active screen onto the surface and
    /// repositions the hardware cursor, hiding it when the viewport has
    /// been paged away from it.
    pub fn render(&mut self) {
        let screen = &self.screens[self.active];
        for (i, line) in screen.visible_rows().iter().enumerate() {
            self.surface.write_block(i * WIDTH, line);
        }
        match screen.cursor_row.checked_sub(screen.view_row) {
            Some(row) if row < HEIGHT => {
                self.surface
                    .set_cursor((row * WIDTH + screen.cursor_col) as u16);
            }
            _ => self.surface.hide_cursor(),
        }
    }

    pub fn put_char(&mut self, c: char) {
        match c {
            '\n' => self.newline(),
            ' '..='~' => {
                self.screens[self.active].put(c as u8);
                self.render();
            }
            _ => {}
        }
    }

    pub fn newline(&mut self) {
        self.screens[self.active].newline();
        self.render();
    }

    pub fn backspace(&mut self) {
        if self.screens[self.active].backspace() {
            self.render();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.screens[self.active].cursor_left() {
            self.render();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.screens[self.active].cursor_right() {
            self.render();
        }
    }

    pub fn cursor_up(&mut self) {
        if self.screens[self.active].cursor_up() {
            self.render();
        }
    }

    pub fn cursor_down(&mut self) {
        if self.screens[self.active].cursor_down() {
            self.render();
        }
    }

    pub fn page_up(&mut self) {
        if self.screens[self.active].page_up() {
            self.render();
        }
    }

    pub fn page_down(&mut self) {
        if self.screens[self.active].page_down() {
            self.render();
        }
    }

    /// Screen contents are stored per screen and written in place, so a
    /// switch is an index change plus a render.
    pub fn switch_to(&mut self, index: usize) {
        if index == self.active || index >= SCREEN_COUNT {
            return;
        }
        self.active = index;
        self.render();
    }

    pub fn mark_input_start(&mut self) {
        self.screens[self.active].mark_input_start();
    }

    /// Alive indicator: one spinner cell in the top history row, blitted
    /// directly only while that row is on the surface.
    pub fn heartbeat(&mut self, glyph: u8) {
        let cell = Cell::new(glyph, HEARTBEAT_COLOR);
        let screen = &mut self.screens[self.active];
        screen.set_cell(0, WIDTH - 1, cell);
        if screen.view_row == 0 {
            self.surface.write_block(WIDTH - 1, core::slice::from_ref(&cell));
        }
    }
}

impl<S: TextSurface> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.put_char(c);
        }
        Ok(())
    }
}

static CONSOLE: Mutex<Console<VgaText>> = Mutex::new(Console::new(VgaText::new()));

pub fn with_console<F, R>(f: F) -> R
where
    F: FnOnce(&mut Console<VgaText>) -> R,
{
    f(&mut CONSOLE.lock())
}

pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    with_console(|console| {
        let _ = console.write_fmt(args);
    });
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::console::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}
