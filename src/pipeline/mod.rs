//! The pipelined MIPS-subset CPU: latches, stage bodies, and the cycle
//! driver. See spec §3, §4.10, §4.11.

pub mod cpu;
pub mod latches;
pub mod stages;
