//! Frame destinations
//!
//! A frame is written in one piece and flushed, so the receiver sees it
//! back to back on the wire. Files and stdout are handy for inspecting the
//! byte stream or piping it into another tool.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Somewhere to send encoded frames
pub trait FrameSink {
    /// Write one complete frame
    fn send_frame(&mut self, frame: &[u8]) -> Result<()>;

    /// Human-readable destination for log lines
    fn describe(&self) -> String;
}

/// Frames appended to a file or stdout
pub struct WriterSink {
    writer: Box<dyn Write>,
    name: String,
}

impl WriterSink {
    /// Create (truncate) `path`; `-` means stdout
    pub fn create(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            return Ok(Self::stdout());
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            name: path.display().to_string(),
        })
    }

    /// Write frames to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            name: String::from("stdout"),
        }
    }
}

impl FrameSink for WriterSink {
    fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.writer
            .write_all(frame)
            .with_context(|| format!("Failed to write frame to {}", self.name))?;
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.name))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

#[cfg(feature = "serial")]
pub use serial::{print_ports, SerialSink};

#[cfg(feature = "serial")]
mod serial {
    use super::FrameSink;
    use anyhow::{Context, Result};
    use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
    use std::io::Write;
    use std::time::Duration;

    /// Frames written to a serial port, 8N1 without flow control
    pub struct SerialSink {
        port: Box<dyn SerialPort>,
        path: String,
        baud_rate: u32,
    }

    impl SerialSink {
        /// Open `path` at `baud_rate`
        pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
            let port = serialport::new(path, baud_rate)
                .data_bits(DataBits::Eight)
                .parity(Parity::None)
                .stop_bits(StopBits::One)
                .flow_control(FlowControl::None)
                .timeout(Duration::from_millis(500))
                .open()
                .with_context(|| format!("Failed to open serial port: {}", path))?;

            Ok(Self {
                port,
                path: path.to_string(),
                baud_rate,
            })
        }
    }

    impl FrameSink for SerialSink {
        fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
            self.port
                .write_all(frame)
                .with_context(|| "Failed to write to serial port")?;
            self.port
                .flush()
                .with_context(|| "Failed to flush serial port")
        }

        fn describe(&self) -> String {
            format!("{} @ {} baud", self.path, self.baud_rate)
        }
    }

    /// Print the serial ports the OS reports
    pub fn print_ports() -> Result<()> {
        let ports =
            serialport::available_ports().with_context(|| "Failed to enumerate serial ports")?;

        if ports.is_empty() {
            println!("No serial ports found");
            return Ok(());
        }

        println!("Available Serial Ports:");
        for port in ports {
            match port.port_type {
                serialport::SerialPortType::UsbPort(info) => {
                    println!(
                        "  {}  USB {:04x}:{:04x} {}",
                        port.port_name,
                        info.vid,
                        info.pid,
                        info.product.unwrap_or_default()
                    );
                }
                serialport::SerialPortType::PciPort => println!("  {}  PCI", port.port_name),
                serialport::SerialPortType::BluetoothPort => {
                    println!("  {}  Bluetooth", port.port_name)
                }
                serialport::SerialPortType::Unknown => println!("  {}", port.port_name),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_frames_back_to_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.bin");

        let mut sink = WriterSink::create(&path).unwrap();
        sink.send_frame(&[1, 2, 3]).unwrap();
        sink.send_frame(&[4, 5, 6]).unwrap();
        assert_eq!(sink.describe(), path.display().to_string());
        drop(sink);

        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_file_sink_truncates_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"stale contents").unwrap();

        let mut sink = WriterSink::create(file.path()).unwrap();
        sink.send_frame(&[9, 9, 9]).unwrap();
        drop(sink);

        assert_eq!(std::fs::read(file.path()).unwrap(), vec![9, 9, 9]);
    }

    #[test]
    fn test_dash_means_stdout() {
        let sink = WriterSink::create(Path::new("-")).unwrap();
        assert_eq!(sink.describe(), "stdout");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frames.bin");
        assert!(WriterSink::create(&path).is_err());
    }
}
