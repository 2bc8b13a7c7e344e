//! Board configuration
//!
//! Constants generated by build.rs from board.toml, plus the runtime
//! configs derived from them.

use lumigrid_core::ReceiverConfig;
use lumigrid_hal::UartConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// LEDs on the grid
pub const GRID_PIXELS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Bytes in one frame on the wire
pub const FRAME_BYTES: usize = GRID_PIXELS * 3;

/// Receiver parameters for this board
pub fn receiver_config() -> ReceiverConfig {
    ReceiverConfig {
        stale_after_ms: STALE_AFTER_MS,
        indicator_active_low: INDICATOR_ACTIVE_LOW,
    }
}

/// Link UART format: board baud rate, 8N1
pub fn link_uart_config() -> UartConfig {
    UartConfig::with_baudrate(BAUDRATE)
}
