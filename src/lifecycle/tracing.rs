//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`) and writes to stderr, leaving stdout to the rendered report.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Hierarchical spans**: every showcase interaction runs inside an `#[instrument]` span
//!
//! ## What Gets Traced
//!
//! - **Builder**: each setter call, at `debug`
//! - **Composite**: each `add_part`, at `debug`; the assembled total, at `info`
//! - **Decorator**: the final cost and description, at `info`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Interaction summaries only
//! RUST_LOG=info cargo run -- decorator --add milk --add sugar
//!
//! # Every setter call and part addition
//! RUST_LOG=debug cargo run -- composite --no-gpu
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG assemble_pc{selection=PcSelection { cpu: true, ram: true, gpu: false, ssd: true }}: add_part parent=Motherboard child=CPU (Intel i9)
//! DEBUG assemble_pc{selection=PcSelection { cpu: true, ram: true, gpu: false, ssd: true }}: add_part parent=Motherboard child=RAM (32GB DDR5)
//! DEBUG assemble_pc{selection=PcSelection { cpu: true, ram: true, gpu: false, ssd: true }}: add_part parent=PC Case child=Motherboard
//! DEBUG assemble_pc{selection=PcSelection { cpu: true, ram: true, gpu: false, ssd: true }}: add_part parent=PC Case child=SSD (2TB NVMe)
//!  INFO assemble_pc{selection=PcSelection { cpu: true, ram: true, gpu: false, ssd: true }}: PC assembled total=1250.0
//! ```

/// Installs the global subscriber.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing for a single crate
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
