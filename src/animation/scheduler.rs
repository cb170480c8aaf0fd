//! Firefly animation scheduler
//!
//! One cycle is a multiplex burst (the PWM layer: every slot sampled once
//! per ramp step, one LED lit at a time), then a logic tick (phase advance,
//! delay countdown, re-arming), then the idle decision: if every slot is
//! dark and waiting, park the matrix and deep-sleep through the shortest
//! wait.

use crate::config::{
    DELAY_RANDOM_BITS, ENTROPY_WARMUP_SAMPLES, IDLE_SLEEP_STEP, INITIAL_FLIES, NUM_SLOTS,
    RAMP_STEPS, REARM_OFFSET_MASK, SLOT_WAIT_TICKS,
};
use crate::drivers::led_matrix::{Drive, DriveLines, LedIndex, LedMatrix};
use crate::entropy::EntropySource;
use crate::logger::{Event, EventSink};
use crate::power::SleepManager;
use crate::prng::Lfsr;
use crate::waveform::Phase;

use super::slot::Slot;

/// Outcome of one scheduler cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Deep-sleep steps taken after the logic tick, 0 if any slot was busy
    pub slept: u16,
}

pub struct Scheduler<P, S, E, K = ()> {
    matrix: LedMatrix<P>,
    power: S,
    entropy: E,
    events: K,
    rng: Lfsr,
    slots: [Slot; NUM_SLOTS],
}

impl<P, S, E, K> Scheduler<P, S, E, K>
where
    P: DriveLines,
    S: SleepManager,
    E: EntropySource,
    K: EventSink,
{
    pub fn new(matrix: LedMatrix<P>, power: S, entropy: E, events: K) -> Self {
        Self {
            matrix,
            power,
            entropy,
            events,
            rng: Lfsr::default(),
            slots: INITIAL_FLIES.map(|fly| Slot::new(LedIndex::wrapping(fly))),
        }
    }

    pub fn with_rng(mut self, rng: Lfsr) -> Self {
        self.rng = rng;
        self
    }

    pub fn rng(&self) -> &Lfsr {
        &self.rng
    }

    pub fn slots(&self) -> &[Slot; NUM_SLOTS] {
        &self.slots
    }

    pub fn matrix(&self) -> &LedMatrix<P> {
        &self.matrix
    }

    pub fn power(&self) -> &S {
        &self.power
    }

    pub fn events(&self) -> &K {
        &self.events
    }

    /// Stirs the start-up seed with a few analog samples.
    pub fn warm_up(&mut self) {
        for _ in 0..ENTROPY_WARMUP_SAMPLES {
            self.feed_entropy();
        }
    }

    pub fn run(&mut self) -> ! {
        self.warm_up();
        self.events.record(&Event::Boot {
            seed: self.rng.state(),
        });
        loop {
            self.cycle();
        }
    }

    pub fn cycle(&mut self) -> Cycle {
        self.multiplex_burst();
        self.logic_tick();
        Cycle {
            slept: self.idle_sleep(),
        }
    }

    /// One PWM period for all slots, interleaved.
    pub fn multiplex_burst(&mut self) {
        for step in 0..RAMP_STEPS as u8 {
            for slot in self.slots.iter_mut() {
                self.power.precise_wait(SLOT_WAIT_TICKS);
                slot.mark_finished();
                match slot.drive_at(step) {
                    Some(drive) => self.matrix.apply(drive),
                    None => self.matrix.all_off(),
                }
            }
        }
    }

    pub fn logic_tick(&mut self) {
        for index in 0..NUM_SLOTS {
            self.slots[index].mark_finished();

            if self.slots[index].delay == 0 {
                let slot = &mut self.slots[index];
                slot.phase = slot.phase.next();
                continue;
            }

            // Slots already counting down sit at the first phase
            if !self.slots[index].phase.is_start() {
                self.rearm(index);
            }

            let slot = &mut self.slots[index];
            slot.delay -= 1;
            if slot.delay == 0 {
                slot.drive = slot.fly.drive();
                let event = Event::Wake {
                    slot: index as u8,
                    fly: slot.fly.get(),
                };
                self.events.record(&event);
                self.feed_entropy();
            }
        }
    }

    /// Shortest pending delay across slots; 0 means some slot needs
    /// servicing now.
    pub fn min_delay(&self) -> u16 {
        self.slots.iter().map(Slot::delay).min().unwrap_or(0)
    }

    /// Sleeps through the shared part of every slot's wait. Returns the
    /// number of coarse steps taken.
    pub fn idle_sleep(&mut self) -> u16 {
        let steps = self.min_delay();
        if steps == 0 {
            return 0;
        }

        self.matrix.park();
        for slot in self.slots.iter_mut() {
            slot.delay -= steps - 1;
        }
        self.events.record(&Event::Sleep { steps });

        for _ in 0..steps {
            self.power.deep_sleep(IDLE_SLEEP_STEP);
        }
        steps
    }

    fn rearm(&mut self, index: usize) {
        let delay = 1
            + self.rng.bounded(DELAY_RANDOM_BITS)
            + self.rng.bounded(DELAY_RANDOM_BITS);
        let fly = self.pick_fly(index);

        let slot = &mut self.slots[index];
        slot.fly = fly;
        slot.drive = Drive::OFF;
        slot.phase = Phase::START;
        slot.delay = delay;

        self.events.record(&Event::Rearm {
            slot: index as u8,
            fly: fly.get(),
            delay,
        });
    }

    /// Picks the n-th LED, n in 0..=7, that no slot holds. The slot's own
    /// outgoing fly counts as held.
    fn pick_fly(&mut self, index: usize) -> LedIndex {
        let offset = usize::from(self.rng.next_u8() & REARM_OFFSET_MASK);
        let held = self.slots.map(|slot| slot.fly);

        LedIndex::all()
            .filter(|led| !held.contains(led))
            .nth(offset)
            .unwrap_or(held[index])
    }

    fn feed_entropy(&mut self) {
        match self.entropy.sample() {
            Ok(reading) => self.rng.inject_entropy(reading & 1 != 0),
            Err(_) => {
                self.events.record(&Event::EntropyFault);
                self.rng.inject_entropy(false);
            }
        }
    }
}
