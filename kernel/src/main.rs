#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(not(target_os = "none"), allow(dead_code))]

mod console;
mod input;
mod keyboard;
mod screen;
mod serial;
mod vga;

pub const OS_NAME: &str = "Ferrite";
pub const OS_VERSION: &str = "0.1.0";

const HEARTBEAT_PERIOD: u64 = 10_000;
const SPINNER: [u8; 4] = [b'|', b'/', b'-', b'\\'];

#[cfg(target_os = "none")]
bootloader_api::entry_point!(kernel_main);

#[cfg(target_os = "none")]
fn kernel_main(_boot_info: &'static mut bootloader_api::BootInfo) -> ! {
    serial::write_line("kernel: entering main");
    console::with_console(|c| c.render());

    println!("{} {}", OS_NAME, OS_VERSION);
    println!("--------------------------------");
    println!("F1/F2/F3 switch screens, PgUp/PgDn scroll.");
    println!("Arrow keys move, Backspace deletes.");
    println!("Type something:");
    console::with_console(|c| c.mark_input_start());

    let mut kbd = keyboard::Keyboard::new();
    serial::write_line("kernel: keyboard ready");

    let mut tick: u64 = 0;
    let mut spin_idx = 0;
    loop {
        if let Some(event) = kbd.poll_event() {
            console::with_console(|c| input::dispatch(c, event));
        }
        tick += 1;
        if tick % HEARTBEAT_PERIOD == 0 {
            console::with_console(|c| c.heartbeat(SPINNER[spin_idx]));
            spin_idx = (spin_idx + 1) % SPINNER.len();
        }
        core::hint::spin_loop();
    }
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    serial::write_fmt(format_args!("kernel panic: {info}"));
    console::with_console(|c| {
        let _ = core::fmt::Write::write_fmt(c, format_args!("\nkernel panic: {info}\n"));
    });
    loop {
        x86_64::instructions::hlt();
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}
