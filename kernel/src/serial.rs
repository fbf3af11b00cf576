use core::fmt;
use core::fmt::Write;

use lazy_static::lazy_static;
use spin::Mutex;
use uart_16550::SerialPort;

lazy_static! {
    static ref COM1: Mutex<SerialPort> = {
        let mut port = unsafe { SerialPort::new(0x3f8) };
        port.init();
        Mutex::new(port)
    };
}

pub fn write_line(msg: &str) {
    let mut port = COM1.lock();
    let _ = port.write_str(msg);
    let _ = port.write_str("\r\n");
}

pub fn write_fmt(args: fmt::Arguments) {
    let mut port = COM1.lock();
    let _ = port.write_fmt(args);
    let _ = port.write_str("\r\n");
}
