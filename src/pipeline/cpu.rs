//! CPU state: owns the PC, register file, the two memories, all four
//! pipeline latches, and the overlay configuration. See spec §4.10, §6.

use crate::bitvec::Reg;
use crate::memory::Memory;
use crate::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::register_file::RegisterFile;

/// Selects which of the three legal overlay configurations (spec §6) is
/// active. `Baseline` has neither forwarding nor hazard detection;
/// `ForwardingOnly` adds the Forwarding Unit; `ForwardingPlusHazard` adds
/// load-use stalling on top of forwarding (hazard detection requires
/// forwarding).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverlayConfig {
    #[default]
    Baseline,
    ForwardingOnly,
    ForwardingPlusHazard,
}

impl OverlayConfig {
    pub fn forwarding_enabled(self) -> bool {
        !matches!(self, OverlayConfig::Baseline)
    }

    pub fn hazard_detection_enabled(self) -> bool {
        matches!(self, OverlayConfig::ForwardingPlusHazard)
    }
}

pub struct PipelineCpu {
    pub pc: Reg<32>,
    pub reg_file: RegisterFile,
    pub inst_mem: Memory,
    pub data_mem: Memory,
    pub if_id: IfId,
    pub id_ex: IdEx,
    pub ex_mem: ExMem,
    pub mem_wb: MemWb,
    pub overlay: OverlayConfig,
    pub cycle: u64,
    pub verbose: bool,

    /// The transient "pcPlus4" wire computed by the IF-stage adder. It is
    /// recomputed only when IF actually runs (i.e. not during a stall),
    /// and is what the MEM-stage PCSrc mux reads as its non-branch input
    /// (spec §9's "known ordering anomaly": IF is last in the per-cycle
    /// call order, so MEM always consumes last cycle's value of this
    /// wire). Seeded to `initial_pc + 4` so the very first cycle's MEM
    /// stage — which runs before any IF has executed — leaves the PC
    /// unchanged rather than clobbering it with a zeroed wire.
    pub(crate) pc_plus4_pending: Reg<32>,
}

impl PipelineCpu {
    pub fn new(
        initial_pc: u32,
        overlay: OverlayConfig,
        verbose: bool,
        reg_file: RegisterFile,
        inst_mem: Memory,
        data_mem: Memory,
    ) -> Self {
        Self {
            pc: Reg::new(initial_pc),
            reg_file,
            inst_mem,
            data_mem,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            overlay,
            cycle: 0,
            verbose,
            pc_plus4_pending: Reg::new(initial_pc.wrapping_add(4)),
        }
    }

    /// Advances the pipeline by exactly one cycle. Stages run in
    /// **reverse pipeline order** (WB, MEM, EX, ID, IF) — this is the
    /// load-bearing ordering from spec §4.11/§9 that lets each stage
    /// consume its input latch before the upstream stage overwrites it
    /// later in the same call.
    pub fn advance_cycle(&mut self) {
        self.cycle += 1;

        // MEM/WB as it stands at the top of the cycle, before this
        // cycle's MEM call overwrites it. EX's forwarding mux needs this
        // pre-update value — real hardware's EX and WB stages both read
        // the same flip-flop contents on the same edge; our sequential
        // WB-then-MEM-then-EX call order would otherwise let MEM clobber
        // the value out from under EX before it gets a chance to read it
        // (this is what makes the load-use stall-then-forward case, spec
        // scenario S2, actually land the loaded value).
        let mem_wb_snapshot = self.mem_wb;

        super::stages::write_back(self);
        super::stages::memory_access(self);
        super::stages::execute(self, mem_wb_snapshot);
        let hazard_ctrl = super::stages::instruction_decode(self);
        super::stages::instruction_fetch(self, hazard_ctrl.ifid_write.to_bool());
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}
