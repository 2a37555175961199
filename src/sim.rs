use sim_lib::error::SimulatorResult;
use sim_lib::flags::SimArgs;
use sim_lib::run_wrapper::{self, RunPolicy};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> SimulatorResult<()> {
    let args = SimArgs::from_env_or_exit();

    let policy = RunPolicy::from_flags(args.forwarding, args.hazard_detection, args.verbose)?;

    run_wrapper::run(
        args.initial_pc,
        &args.reg_file,
        &args.inst_mem,
        &args.data_mem,
        args.num_cycles,
        policy,
    )
}
