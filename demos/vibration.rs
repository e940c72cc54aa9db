// demos/vibration.rs

use vtol_flight_stabilization::config::FlightControlConfig;
use vtol_flight_stabilization::{ControlState, CycleInput, TickInput};

const NOMINAL_PERIOD: u32 = 3571;

fn main() {
    let mut config = FlightControlConfig::new();

    // Route the high-pass noise estimate to the display.
    config.vibration_display = true;

    let mut state = ControlState::new();
    let mut gyro = [0i16; 3];

    // Feed a clean gyro stream, then a shaking one, then freeze the
    // readout by switching the display off mid-shake.
    println!(" tick   phase      noise level");
    for tick in 0..150 {
        let shaking = tick >= 50;
        if tick == 100 {
            config.vibration_display = false;
        }

        let shake = if shaking {
            // Alternating high-rate motion the low-frequency control
            // terms would never produce.
            if tick % 2 == 0 {
                400
            } else {
                -400
            }
        } else {
            0
        };

        gyro = [12 + shake, -8 - shake, 3];
        let input = TickInput {
            gyro_raw: gyro,
            acc_vert: 0.0,
            aileron: 0,
            elevator: 0,
            rudder: 0,
        };
        state.sample(&config, &input, &mut gyro, NOMINAL_PERIOD);

        if tick % 10 == 9 {
            let phase = if tick >= 100 {
                "frozen"
            } else if shaking {
                "shaking"
            } else {
                "clean"
            };
            println!("{:5}   {:-8} {:12.2}", tick + 1, phase, state.gyro_noise());

            // Close out the averaging window the way the supervisory
            // loop would.
            state.combine(&config, &CycleInput::default(), &mut gyro);
        }
    }
}
