use embedded_hal_mock::adc::{Mock as AdcMock, MockChan1, Transaction};
use embedded_hal_mock::delay::MockNoop;

use fireflies::config::{ENTROPY_WARMUP_SAMPLES, LED_COUNT, NUM_SLOTS};
use fireflies::drivers::{DriveLines, LedMatrix, LED_DRIVES};
use fireflies::entropy::{AdcEntropy, EntropySource};
use fireflies::power::DelaySleep;
use fireflies::prng::Lfsr;
use fireflies::{Scheduler, SlotState};

/// Port model that checks the drive ordering and counts lit samples per LED.
#[derive(Default)]
struct SimPort {
    output: u8,
    direction: u8,
    lit: [u32; LED_COUNT],
}

impl DriveLines for SimPort {
    fn set_output(&mut self, mask: u8) {
        self.output = mask;
        if mask == 0 {
            return;
        }
        let led = LED_DRIVES
            .iter()
            .position(|d| d.direction == self.direction && d.output == mask)
            .expect("output does not match any single LED");
        self.lit[led] += 1;
    }

    fn set_direction(&mut self, mask: u8) {
        assert_eq!(self.output, 0, "direction changed with output asserted");
        self.direction = mask;
    }
}

fn readings(values: &[u16]) -> Vec<Transaction<u16>> {
    values.iter().map(|&v| Transaction::read(1, v)).collect()
}

#[test]
fn adc_entropy_reads_the_configured_channel() {
    let expectations = readings(&[0x0201, 0x0200]);
    let mut entropy = AdcEntropy::new(AdcMock::new(&expectations), MockChan1 {});
    assert_eq!(entropy.sample(), Ok(0x0201));
    assert_eq!(entropy.sample(), Ok(0x0200));

    let (mut adc, _) = entropy.release();
    adc.done();
}

#[test]
fn warm_up_folds_in_each_low_bit() {
    let values = [3u16, 8, 5, 5, 0, 1, 2, 7];
    assert_eq!(values.len(), usize::from(ENTROPY_WARMUP_SAMPLES));

    let expectations = readings(&values);
    let entropy = AdcEntropy::new(AdcMock::new(&expectations), MockChan1 {});
    let mut scheduler = Scheduler::new(
        LedMatrix::new(SimPort::default()),
        DelaySleep::new(MockNoop::new()),
        entropy,
        (),
    );
    scheduler.warm_up();

    let mut expected = Lfsr::default();
    for value in values {
        expected.inject_entropy(value & 1 == 1);
    }
    assert_eq!(*scheduler.rng(), expected);
}

#[test]
fn show_lights_one_led_at_a_time_and_sleeps_when_dark() {
    let values: Vec<u16> = (0..64u16).map(|i| i.wrapping_mul(0x9e37)).collect();
    let expectations = readings(&values);
    let entropy = AdcEntropy::new(AdcMock::new(&expectations), MockChan1 {});
    let mut scheduler = Scheduler::new(
        LedMatrix::new(SimPort::default()),
        DelaySleep::new(MockNoop::new()),
        entropy,
        (),
    );
    scheduler.warm_up();

    let mut slept_cycles = 0;
    for _ in 0..600 {
        let cycle = scheduler.cycle();
        if cycle.slept > 0 {
            slept_cycles += 1;
            assert!(scheduler
                .slots()
                .iter()
                .all(|s| s.state() == SlotState::ArmedWait));
        }
        assert_eq!(scheduler.slots().len(), NUM_SLOTS);
    }

    assert!(slept_cycles > 0);
    let lit: u32 = scheduler.matrix().lines().lit.iter().sum();
    assert!(lit > 0);
}
