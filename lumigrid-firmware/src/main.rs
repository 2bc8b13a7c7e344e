//! Lumigrid - Serial-fed LED Grid Firmware
//!
//! Receives raw frames over a UART link and shows them on a WS2812 grid
//! driven by PIO. The board blanks the grid when the host goes quiet and
//! mirrors link liveness on the on-board LED.
//!
//! Grid size, baud rate and the liveness timeout come from board.toml and
//! are fixed at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Config as RpUartConfig};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumigrid_core::FrameReceiver;
use lumigrid_hal::{DigitalOutput, IoSerialRx};
use lumigrid_hal_rp2040::{embassy_uart_config, PioLedGrid};

mod config;
mod tasks;

use config::{BAUDRATE, BRIGHTNESS, FRAME_BYTES, GRID_HEIGHT, GRID_PIXELS, GRID_WIDTH};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// UART receive ring size
///
/// Bytes arriving while a frame is shown pile up here and are drained
/// afterwards, so the ring only needs to cover scheduling jitter.
const RX_BUF_SIZE: usize = 256;

// Static cell for the UART ring (must live forever)
static RX_BUF: StaticCell<[u8; RX_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!(
        "Lumigrid firmware starting ({}x{} grid, {} bytes/frame, {} baud)",
        GRID_WIDTH, GRID_HEIGHT, FRAME_BYTES, BAUDRATE
    );

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Link UART, receive only
    // Pin assignment is board-specific (Pico: UART0 RX on GPIO1)
    let uart_config = match embassy_uart_config(&config::link_uart_config()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Unsupported link format: {:?}, using 115200 8N1", e);
            RpUartConfig::default()
        }
    };
    let rx_buf = RX_BUF.init([0u8; RX_BUF_SIZE]);
    let rx = BufferedUartRx::new(p.UART0, Irqs, p.PIN_1, rx_buf, uart_config);
    info!("UART initialized for frame link");

    // Liveness LED
    // Pin assignment is board-specific (Pico: on-board LED on GPIO25)
    let indicator = DigitalOutput::new(Output::new(p.PIN_25, Level::Low), false);

    // WS2812 grid on PIO0
    // Pin assignment is board-specific (data on GPIO3)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let strip: PioWs2812<'static, PIO0, 0, GRID_PIXELS> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_3, &program);
    let grid = PioLedGrid::new(strip, BRIGHTNESS);
    info!("PIO WS2812 initialized (brightness {})", BRIGHTNESS);

    let receiver = FrameReceiver::new(
        IoSerialRx::new(rx),
        grid,
        indicator,
        config::receiver_config(),
    );

    spawner.spawn(unwrap!(tasks::receiver_task(receiver)));

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
