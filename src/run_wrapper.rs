//! Wires parsed CLI flags to the loader and the CPU's cycle loop. See
//! spec §5, §6.

use std::path::Path;

use crate::error::SimulatorResult;
use crate::loader;
use crate::pipeline::cpu::{OverlayConfig, PipelineCpu};
use crate::pvs::print_pvs;
use crate::SimulatorError;

/// Default memory image size used for the data/instruction stores (there
/// is no notion of a configurable memory size in spec.md's CLI; images
/// larger than this are rejected by the loader as out-of-range).
const MEMORY_SIZE_BYTES: usize = 1 << 16;

pub struct RunPolicy {
    pub overlay: OverlayConfig,
    pub verbose: bool,
}

impl RunPolicy {
    pub fn from_flags(forwarding: bool, hazard_detection: bool, verbose: bool) -> SimulatorResult<Self> {
        let overlay = match (forwarding, hazard_detection) {
            (false, true) => {
                return Err(SimulatorError::ConfigError(
                    "--hazard-detection requires --forwarding".into(),
                ))
            }
            (false, false) => OverlayConfig::Baseline,
            (true, false) => OverlayConfig::ForwardingOnly,
            (true, true) => OverlayConfig::ForwardingPlusHazard,
        };
        Ok(Self { overlay, verbose })
    }
}

/// Loads the three memory images, constructs the CPU, and advances it
/// `num_cycles` times, printing a PVS snapshot after construction and
/// after every cycle (`num_cycles + 1` snapshots total — the original
/// driver's literal behavior, spec.md §6 / `testAssn4.cc`).
pub fn run(
    initial_pc: u32,
    reg_file_path: &Path,
    inst_mem_path: &Path,
    data_mem_path: &Path,
    num_cycles: u64,
    policy: RunPolicy,
) -> SimulatorResult<()> {
    let reg_file = loader::load_register_file(reg_file_path)?;
    let inst_mem = loader::load_memory(inst_mem_path, MEMORY_SIZE_BYTES)?;
    let data_mem = loader::load_memory(data_mem_path, MEMORY_SIZE_BYTES)?;

    // The loader subtracts 4 so that the first IF fetches `initial_pc`
    // (spec §6; `pc_plus4_pending` must be seeded to `initial_pc`).
    let constructed_pc = initial_pc.wrapping_sub(4);
    let mut cpu = PipelineCpu::new(
        constructed_pc,
        policy.overlay,
        policy.verbose,
        reg_file,
        inst_mem,
        data_mem,
    );

    print_pvs(&cpu);
    for _ in 0..num_cycles {
        cpu.advance_cycle();
        print_pvs(&cpu);
    }

    Ok(())
}
