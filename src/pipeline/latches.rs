//! The four pipeline latches. See spec §3. Field names and nesting
//! (`CtrlWb`/`CtrlMem`/`CtrlEx` sub-structs) mirror the original's
//! `ControlWB_t`/`ControlMEM_t`/`ControlEX_t` typedefs in
//! `PipelinedCPU.h`.

use crate::bitvec::Reg;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CtrlWb {
    pub mem_to_reg: Reg<1>,
    pub reg_write: Reg<1>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CtrlMem {
    pub branch: Reg<1>,
    pub mem_read: Reg<1>,
    pub mem_write: Reg<1>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CtrlEx {
    pub reg_dst: Reg<1>,
    pub alu_op: Reg<2>,
    pub alu_src: Reg<1>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IfId {
    pub pc_plus4: Reg<32>,
    pub instruction: Reg<32>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IdEx {
    pub ctrl_wb: CtrlWb,
    pub ctrl_mem: CtrlMem,
    pub ctrl_ex: CtrlEx,
    pub pc_plus4: Reg<32>,
    pub read_data1: Reg<32>,
    pub read_data2: Reg<32>,
    pub sign_ext_imm: Reg<32>,
    pub rs: Reg<5>,
    pub rt: Reg<5>,
    pub rd: Reg<5>,
}

impl IdEx {
    /// Zeroes the control fields only, forming a bubble (spec §4.9's
    /// effect of `idexCtrlWrite=0`): data fields still latch.
    pub fn zero_controls(&mut self) {
        self.ctrl_wb = CtrlWb::default();
        self.ctrl_mem = CtrlMem::default();
        self.ctrl_ex = CtrlEx::default();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    pub ctrl_wb: CtrlWb,
    pub ctrl_mem: CtrlMem,
    pub branch_target_addr: Reg<32>,
    pub alu_zero: Reg<1>,
    pub alu_result: Reg<32>,
    pub read_data2: Reg<32>,
    pub reg_dst_idx: Reg<5>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    pub ctrl_wb: CtrlWb,
    pub data_mem_read_data: Reg<32>,
    pub alu_result: Reg<32>,
    pub reg_dst_idx: Reg<5>,
}
