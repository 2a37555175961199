//! CLI argument parsing. See spec §6.

use std::path::PathBuf;

xflags::xflags! {
    /// Cycle-accurate 5-stage pipelined MIPS-subset simulator.
    cmd SimArgs {
        /// Initial program counter (the first address IF will fetch).
        required initial_pc: u32

        /// Path to the register-file image.
        required reg_file: PathBuf

        /// Path to the instruction-memory image.
        required inst_mem: PathBuf

        /// Path to the data-memory image.
        required data_mem: PathBuf

        /// Number of cycles to simulate.
        required num_cycles: u64

        /// Enables the Forwarding Unit.
        optional --forwarding

        /// Enables the Hazard Detection Unit (requires --forwarding).
        optional --hazard-detection

        /// Enables verbose per-stage diagnostics on stderr.
        optional -v, --verbose
    }
}
