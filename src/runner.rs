//! Scenario runner: drive a test body through simulated power loss.
//!
//! The test body receives the device, mounts whatever filesystem it is
//! testing and does its work. When power is lost the device returns
//! `Err(PowerLoss)`, the body passes it straight up, and the runner calls
//! the body again on the same (crashed) device, which forces a remount
//! and exercises crash recovery. The body must therefore be restartable:
//! every call starts from a mount.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::emubd::{EmuBd, EmuConfig, Resume};
use crate::Error;

/// Lets the runner tell a power loss apart from a real failure in the
/// test body's error type.
pub trait PowerLossAware {
    fn is_powerloss(&self) -> bool;
}

impl PowerLossAware for Error {
    fn is_powerloss(&self) -> bool {
        matches!(self, Error::PowerLoss)
    }
}

/// When to lose power.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Never; run the test once.
    None,
    /// After 1 operation, then 2 after the first crash, 3 after the
    /// second, and so on until a run completes.
    Linear,
    /// After 1 operation, then 2, 4, 8, ... trading coverage for speed.
    Log,
    /// After `schedule[i]` operations on the i-th run. Once the schedule
    /// runs out, power loss is disabled and the test runs to completion.
    Explicit(Vec<u32>),
    /// Every reachable crash point, forking the device at each one and
    /// recursing into every fork up to `depth` crashes deep.
    Exhaustive { depth: usize },
}

// Where a resumable run is at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Crashed,
    Exhausted,
    Finished,
}

/// What a run of the scenario went through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of times the test body was invoked.
    pub runs: usize,
    /// Number of simulated power losses.
    pub powerlosses: usize,
    /// One entry per power loss: the power-cycle schedule leading up to
    /// it. Any trail replays under [`Strategy::Explicit`].
    pub trails: Vec<Vec<u32>>,
}

pub struct Runner {
    config: EmuConfig,
    strategy: Strategy,
}

impl Runner {
    /// `config.power_cycles` is ignored, the strategy decides it.
    pub fn new(config: EmuConfig, strategy: Strategy) -> Self {
        Runner { config, strategy }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Run `test` under the configured strategy. A failure other than a
    /// power loss stops the scenario and is returned as is.
    pub fn run<E, F>(&self, mut test: F) -> Result<Report, E>
    where
        E: From<Error> + PowerLossAware,
        F: FnMut(&mut EmuBd) -> Result<(), E>,
    {
        match &self.strategy {
            Strategy::None => self.run_resuming(|_| 0, &mut test),
            Strategy::Linear => self.run_resuming(|i| (i as u32).saturating_add(1), &mut test),
            Strategy::Log => self.run_resuming(
                |i| 1u32.checked_shl(i as u32).unwrap_or(u32::MAX),
                &mut test,
            ),
            Strategy::Explicit(schedule) => {
                self.run_resuming(|i| schedule.get(i).copied().unwrap_or(0), &mut test)
            }
            Strategy::Exhaustive { depth } => self.run_exhaustive(*depth, &mut test),
        }
    }

    // Run, crash, remount, repeat. `schedule(n)` is the power-cycle count
    // armed after the n-th crash (and before the first run for n = 0).
    fn run_resuming<E, F, S>(&self, schedule: S, test: &mut F) -> Result<Report, E>
    where
        E: From<Error> + PowerLossAware,
        F: FnMut(&mut EmuBd) -> Result<(), E>,
        S: Fn(usize) -> u32,
    {
        let mut cfg = self.config.clone();
        cfg.power_cycles = schedule(0);
        let mut bd = EmuBd::new(cfg)?;

        let mut report = Report::default();
        let mut trail = vec![bd.power_cycles()];
        let mut state = if bd.power_cycles() == 0 {
            State::Exhausted
        } else {
            State::Running
        };

        loop {
            state = match state {
                State::Running => {
                    report.runs += 1;
                    match test(&mut bd) {
                        Ok(()) => State::Finished,
                        Err(e) if e.is_powerloss() => State::Crashed,
                        Err(e) => return Err(e),
                    }
                }
                State::Crashed => {
                    report.powerlosses += 1;
                    debug!("powerloss {:?}", trail);
                    report.trails.push(trail.clone());

                    let cycles = schedule(report.powerlosses);
                    bd.set_power_cycles(cycles);
                    trail.push(cycles);
                    if cycles == 0 {
                        State::Exhausted
                    } else {
                        State::Running
                    }
                }
                State::Exhausted => {
                    debug!("no more power losses scheduled, running to completion");
                    State::Running
                }
                State::Finished => break,
            };
        }

        debug!("finished after {} runs, {} powerlosses", report.runs, report.powerlosses);
        Ok(report)
    }

    fn run_exhaustive<E, F>(&self, depth: usize, test: &mut F) -> Result<Report, E>
    where
        E: From<Error> + PowerLossAware,
        F: FnMut(&mut EmuBd) -> Result<(), E>,
    {
        let mut cfg = self.config.clone();
        cfg.power_cycles = 0;
        let bd = EmuBd::new(cfg)?;

        let mut report = Report::default();
        let mut trail = Vec::new();
        self.exhaustive_layer(bd, depth, &mut trail, &mut report, test)?;

        debug!("finished after {} runs, {} powerlosses", report.runs, report.powerlosses);
        Ok(report)
    }

    // Run the test once without losing power, forking the device at every
    // prog and erase on the way, then recurse into each fork.
    fn exhaustive_layer<E, F>(
        &self,
        mut bd: EmuBd,
        depth: usize,
        trail: &mut Vec<u32>,
        report: &mut Report,
        test: &mut F,
    ) -> Result<(), E>
    where
        E: From<Error> + PowerLossAware,
        F: FnMut(&mut EmuBd) -> Result<(), E>,
    {
        let branches: Rc<RefCell<Vec<EmuBd>>> = Rc::default();
        if depth > 0 {
            let sink = Rc::clone(&branches);
            bd.set_powerloss_cb(move |bd: &mut EmuBd| {
                let branch = bd.copy()?;
                sink.borrow_mut().push(branch);
                // Also fork on the very next operation.
                bd.set_power_cycles(1);
                Ok(Resume::Continue)
            });
            bd.set_power_cycles(1);
        } else {
            // Too deep to fork. Should the body arm a countdown of its own,
            // ride through it.
            bd.set_powerloss_cb(|_| Ok(Resume::Continue));
            bd.set_power_cycles(0);
        }

        report.runs += 1;
        test(&mut bd)?;

        // Drop the device (and the callback holding on to `branches`)
        // before descending, the tree can get wide.
        drop(bd);
        let branches = branches.take();
        debug!("layer {:?} done with {} branches", trail, branches.len());

        for (i, branch) in branches.into_iter().enumerate() {
            trail.push(i as u32 + 1);
            report.powerlosses += 1;
            debug!("powerloss {:?}", trail);
            report.trails.push(trail.clone());

            self.exhaustive_layer(branch, depth - 1, trail, report, test)?;
            trail.pop();
        }
        Ok(())
    }
}
