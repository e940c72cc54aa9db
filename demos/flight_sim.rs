// demos/flight_sim.rs

use vtol_flight_stabilization::config::{FlightControlConfig, GyroLpf, P1, P2};
use vtol_flight_stabilization::{ControlState, CycleInput, TickInput};

// Supervisory cycle length in ticks and the nominal tick period in
// 2.5 MHz timer counts.
const TICKS_PER_CYCLE: u32 = 8;
const NOMINAL_PERIOD: u32 = 3571;

fn main() {
    let mut config = FlightControlConfig::new();

    // Set the gyro PID gains for the hover profile.
    config.flight_mode[P1].p_gain = [40, 50, 60];
    config.flight_mode[P1].i_gain = [20, 20, 40, 10];

    // Bound the integrators and their output authority.
    config.flight_mode[P1].i_constrain = [125_000, 125_000, 125_000];
    config.flight_mode[P1].i_limit = [10_000, 10_000, 10_000, 4_000];

    // Set the autolevel gains, vertical hold in the yaw slot.
    config.flight_mode[P1].level_gain = [30, 30, 15];

    // Forward flight runs rate-only with softer sticks.
    config.flight_mode[P2].p_gain = [30, 30, 50];
    config.flight_mode[P2].stick_rate = [4, 4, 3];
    config.flight_mode[P2].i_constrain = [125_000, 125_000, 125_000];
    config.flight_mode[P2].i_limit = [10_000, 10_000, 10_000, 4_000];

    // Select the gyro filter and the loop rate.
    config.gyro_lpf = GyroLpf::Hz21;
    config.fast_loop = false;

    let mut state = ControlState::new();
    let mut gyro = [0i16; 3];

    // Simulated disturbance: the airframe is rolling right, nosing down
    // a little, and sinking.
    let mut roll_rate: f32 = 120.0;
    let mut pitch_rate: f32 = -25.0;
    let mut roll_angle: f32 = 4.0;
    let mut sink: f32 = 9.0;

    println!("cycle      gyro avg (r/p/y)      P1 gyro PID      P2 gyro PID    P1 level  P1 hold");
    for cycle in 1..=12 {
        for _ in 0..TICKS_PER_CYCLE {
            // Fresh sensor samples go into the shared gyro array; the
            // sampler smooths them in place.
            gyro = [roll_rate as i16, pitch_rate as i16, 2];
            let tick = TickInput {
                gyro_raw: gyro,
                acc_vert: sink,
                aileron: 0,
                elevator: 0,
                rudder: 0,
            };
            state.sample(&config, &tick, &mut gyro, NOMINAL_PERIOD);
        }

        let cycle_input = CycleInput {
            angle: [roll_angle as i16, 0],
            acc_vert: sink,
        };
        state.combine(&config, &cycle_input, &mut gyro);

        let gyros = state.pid_gyros();
        let accs = state.pid_accs();
        println!(
            "{:5}   {:6} {:6} {:6}   {:5} {:5} {:5}   {:5} {:5} {:5}   {:9} {:8}",
            cycle,
            gyro[0],
            gyro[1],
            gyro[2],
            gyros[P1][0],
            gyros[P1][1],
            gyros[P1][2],
            gyros[P2][0],
            gyros[P2][1],
            gyros[P2][2],
            accs[P1][0],
            accs[P1][2],
        );

        // Simulate the response: the corrections damp the disturbance.
        roll_rate -= gyros[P1][0] as f32 * 0.6;
        pitch_rate -= gyros[P1][1] as f32 * 0.6;
        roll_angle += roll_rate * 0.011;
        sink *= 0.8;
    }
}
