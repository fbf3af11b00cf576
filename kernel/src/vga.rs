use x86_64::instructions::port::Port;

pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 25;

const VGA_ADDRESS: usize = 0xb8000;

const CRTC_INDEX: u16 = 0x3d4;
const CRTC_DATA: u16 = 0x3d5;
const CURSOR_LOW: u8 = 0x0f;
const CURSOR_HIGH: u8 = 0x0e;
const OFFSCREEN: u16 = (WIDTH * HEIGHT) as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self(((background as u8) << 4) | foreground as u8)
    }
}

/// One display cell, layout-identical to a VGA text-mode entry.
/// A zero glyph marks the cell as unwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    pub glyph: u8,
    pub color: ColorCode,
}

impl Cell {
    pub const fn new(glyph: u8, color: ColorCode) -> Self {
        Self { glyph, color }
    }

    pub const fn blank(color: ColorCode) -> Self {
        Self::new(0, color)
    }

    pub const fn is_blank(&self) -> bool {
        self.glyph == 0
    }
}

pub trait TextSurface {
    fn write_block(&mut self, offset: usize, cells: &[Cell]);
    fn set_cursor(&mut self, offset: u16);
    fn hide_cursor(&mut self);
}

pub struct VgaText {
    index: Port<u8>,
    data: Port<u8>,
}

impl VgaText {
    pub const fn new() -> Self {
        Self {
            index: Port::new(CRTC_INDEX),
            data: Port::new(CRTC_DATA),
        }
    }

    fn write_position(&mut self, pos: u16) {
        unsafe {
            self.index.write(CURSOR_LOW);
            self.data.write((pos & 0xff) as u8);
            self.index.write(CURSOR_HIGH);
            self.data.write((pos >> 8) as u8);
        }
    }
}

impl TextSurface for VgaText {
    fn write_block(&mut self, offset: usize, cells: &[Cell]) {
        if offset + cells.len() > WIDTH * HEIGHT {
            return;
        }
        let base = (VGA_ADDRESS as *mut Cell).wrapping_add(offset);
        for (i, cell) in cells.iter().enumerate() {
            // SAFETY: bounds-checked above; the text buffer is MMIO, so the
            // write must be volatile.
            unsafe { base.add(i).write_volatile(*cell) };
        }
    }

    fn set_cursor(&mut self, offset: u16) {
        self.write_position(offset);
    }

    fn hide_cursor(&mut self) {
        self.write_position(OFFSCREEN);
    }
}
